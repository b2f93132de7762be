use pokeher_engine::cards::{full_deck, parse_cards, Card, Rank as R, Suit as S};
use pokeher_engine::errors::EvalError;
use pokeher_engine::hand::{compare_hands, evaluate, score_five, Category};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn c(r: R, s: S) -> Card {
    Card::new(r, s)
}

fn eval(s: &str) -> pokeher_engine::hand::Evaluation {
    evaluate(&parse_cards(s).unwrap()).unwrap()
}

#[test]
fn detects_royal_flush_among_seven() {
    let best = eval("Th Jh Qh Kh Ah 2c 3d");
    assert_eq!(best.category(), Category::StraightFlush);
    assert!(best.cards.iter().all(|c| c.suit == S::Hearts));
}

#[test]
fn category_ladder() {
    let ladder = [
        ("2c 5d 9h Js Kc", Category::HighCard),
        ("2c 2d 9h Js Kc", Category::OnePair),
        ("2c 2d 9h 9s Kc", Category::TwoPair),
        ("2c 2d 2h Js Kc", Category::ThreeOfAKind),
        ("5c 6d 7h 8s 9c", Category::Straight),
        ("2h 5h 9h Jh Kh", Category::Flush),
        ("2c 2d 2h Ks Kc", Category::FullHouse),
        ("2c 2d 2h 2s Kc", Category::FourOfAKind),
        ("5h 6h 7h 8h 9h", Category::StraightFlush),
    ];
    let scores: Vec<_> = ladder
        .iter()
        .map(|(cards, category)| {
            let e = eval(cards);
            assert_eq!(e.category(), *category, "{cards}");
            e.score
        })
        .collect();
    assert!(scores.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn wheel_is_not_a_straight() {
    assert_eq!(eval("Ac 2d 3h 4s 5c").category(), Category::HighCard);
}

#[test]
fn higher_pair_beats_lower_pair_with_better_kickers() {
    let kings = eval("Kc Kd 2h 3s 4c");
    let queens = eval("Qc Qd Ah Js 9c");
    assert!(compare_hands(&kings, &queens).is_gt());
}

#[test]
fn kicker_decides_equal_pairs() {
    let a = eval("9c 9d Ah 5s 3c");
    let b = eval("9h 9s Kh Qs Jc");
    assert!(a.score > b.score);
}

#[test]
fn full_house_trips_rank_dominates_pair_rank() {
    let threes_full = eval("3c 3d 3h As Ac");
    let twos_full = eval("2c 2d 2h Ks Kc");
    assert!(threes_full.score > twos_full.score);
}

#[test]
fn suits_never_break_ties() {
    let a = eval("Ac Kd 9h 7s 3c");
    let b = eval("Ad Kh 9s 7c 3d");
    assert_eq!(a.score, b.score);
    assert!(compare_hands(&a, &b).is_eq());
}

#[test]
fn too_few_cards_is_an_error() {
    let cards = parse_cards("Ac Kd 9h 7s").unwrap();
    assert_eq!(evaluate(&cards), Err(EvalError::TooFewCards(4)));
}

#[test]
fn duplicate_cards_are_rejected() {
    let cards = parse_cards("Ac Ac 9h 7s 2d").unwrap();
    assert_eq!(
        evaluate(&cards),
        Err(EvalError::DuplicateCard(c(R::Ace, S::Clubs)))
    );
}

#[test]
fn evaluation_is_deterministic_and_order_independent() {
    let cards = parse_cards("7c 7d 7h Ks Kc 2d 2h").unwrap();
    let first = evaluate(&cards).unwrap();
    let mut reversed = cards.clone();
    reversed.reverse();
    let again = evaluate(&reversed).unwrap();
    assert_eq!(first, again);
    assert_eq!(first.category(), Category::FullHouse);
}

#[test]
fn quads_outscore_every_full_house_in_random_sample() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let ranks: Vec<R> = pokeher_engine::cards::all_ranks().to_vec();
    let suits = pokeher_engine::cards::all_suits();
    for _ in 0..2000 {
        let mut picked = ranks.clone();
        picked.shuffle(&mut rng);
        let (q, k, t, p) = (picked[0], picked[1], picked[2], picked[3]);

        let quads = [
            c(q, S::Clubs),
            c(q, S::Diamonds),
            c(q, S::Hearts),
            c(q, S::Spades),
            c(k, suits[rng_index(&mut rng)]),
        ];
        let mut trip_suits = suits;
        trip_suits.shuffle(&mut rng);
        let mut pair_suits = suits;
        pair_suits.shuffle(&mut rng);
        let full = [
            c(t, trip_suits[0]),
            c(t, trip_suits[1]),
            c(t, trip_suits[2]),
            c(p, pair_suits[0]),
            c(p, pair_suits[1]),
        ];
        assert!(score_five(&quads) > score_five(&full));
    }
}

fn rng_index(rng: &mut ChaCha20Rng) -> usize {
    use rand::Rng;
    rng.random_range(0..4)
}

#[test]
fn seven_card_best_is_at_least_every_five_card_subset() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let mut deck = full_deck();
    for _ in 0..200 {
        deck.shuffle(&mut rng);
        let seven = &deck[..7];
        let best = evaluate(seven).unwrap();
        for skip_a in 0..7 {
            for skip_b in skip_a + 1..7 {
                let five: Vec<Card> = seven
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip_a && *i != skip_b)
                    .map(|(_, c)| *c)
                    .collect();
                let arr: [Card; 5] = five.try_into().unwrap();
                assert!(best.score >= score_five(&arr));
            }
        }
    }
}
