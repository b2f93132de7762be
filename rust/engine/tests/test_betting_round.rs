use pokeher_engine::betting::{BettingRound, PostOutcome};
use pokeher_engine::blinds::{BlindManager, Blinds, FixedSchedule};
use pokeher_engine::errors::BettingError;
use pokeher_engine::rules::PotLimit;

#[test]
fn four_handed_limped_pot_closes_on_big_blind_check() {
    let mut round = BettingRound::new(vec!["A", "B", "C", "D"], [("A", 10), ("B", 20)]);
    assert_eq!(round.next_to_act(), Some(&"C"));

    assert_eq!(round.post(&"C", 20), Ok(PostOutcome::Accepted));
    assert_eq!(round.next_to_act(), Some(&"D"));
    assert_eq!(round.post(&"D", 20), Ok(PostOutcome::Accepted));
    assert_eq!(round.next_to_act(), Some(&"A"));
    assert_eq!(round.post(&"A", 10), Ok(PostOutcome::Accepted));
    assert_eq!(round.next_to_act(), Some(&"B"));
    assert_eq!(round.high_bettor(), None);
    assert_eq!(round.post(&"B", 0), Ok(PostOutcome::Accepted));

    assert_eq!(round.next_to_act(), None);
    assert!(round.is_closed());
    assert_eq!(round.pot_summary(), (80, 20));
}

// Big blind seated first so it acts before the small blind completes.
fn blinds_then_big_blind_raise() -> BettingRound<&'static str> {
    let mut round = BettingRound::new(vec!["BB", "SB"], [("SB", 10), ("BB", 20)]);
    assert_eq!(round.pot_summary(), (30, 20));
    assert_eq!(round.high_bettor(), None);
    assert_eq!(round.next_to_act(), Some(&"BB"));
    round.post(&"BB", 20).unwrap();
    round
}

#[test]
fn big_blind_raise_makes_it_high_bettor() {
    let round = blinds_then_big_blind_raise();
    assert_eq!(round.high_bettor(), Some(&"BB"));
    assert!(!round.can_act(&"BB"));
    assert_eq!(round.next_to_act(), Some(&"SB"));
    assert_eq!(round.to_call(&"SB"), Some(30));
}

#[test]
fn small_blind_completes_raise() {
    let mut round = blinds_then_big_blind_raise();
    assert_eq!(round.post(&"SB", 30), Ok(PostOutcome::Accepted));
    assert!(round.is_closed());
    assert_eq!(round.pot_summary(), (80, 40));
}

#[test]
fn small_blind_short_of_raise_folds() {
    let mut round = blinds_then_big_blind_raise();
    assert_eq!(round.post(&"SB", 20), Ok(PostOutcome::Folded));
    assert!(round.is_closed());
    assert_eq!(round.pot_summary(), (50, 40));
}

#[test]
fn raise_after_fold_reopens_action_for_caller() {
    let mut round = BettingRound::new(vec!["SB", "BB", "C"], [("SB", 10), ("BB", 20)]);
    round.post(&"C", 20).unwrap();
    // big blind has not acted yet, small blind is next
    assert_eq!(round.next_to_act(), Some(&"SB"));
    round.fold(&"SB").unwrap();
    round.post(&"BB", 20).unwrap();
    assert_eq!(round.high_bettor(), Some(&"BB"));
    assert_eq!(round.next_to_act(), Some(&"C"));
    assert_eq!(round.to_call(&"C"), Some(20));
    assert_eq!(round.to_call(&"SB"), None);
}

#[test]
fn under_call_folds_and_is_not_added_to_pot() {
    let mut round = BettingRound::new(vec!["SB", "BB", "C"], [("SB", 10), ("BB", 20)]);
    round.post(&"C", 40).unwrap();
    assert_eq!(round.pot_summary(), (70, 40));
    assert_eq!(round.to_call(&"SB"), Some(30));

    assert_eq!(round.post(&"SB", 10), Ok(PostOutcome::Folded));
    assert!(!round.is_staked(&"SB"));
    assert_eq!(round.pot_summary(), (70, 40));

    assert_eq!(round.next_to_act(), Some(&"BB"));
    assert_eq!(round.post(&"BB", 20), Ok(PostOutcome::Accepted));
    assert!(round.is_closed());
    assert_eq!(round.pot_summary(), (90, 40));
    assert_eq!(round.active_players().collect::<Vec<_>>(), vec![&"BB", &"C"]);
}

#[test]
fn high_bettor_is_never_next_to_act_before_others_respond() {
    let mut round = BettingRound::new(vec![1u8, 2, 3], Vec::new());
    round.post(&1, 50).unwrap();
    assert_ne!(round.next_to_act(), Some(&1));
    round.post(&2, 50).unwrap();
    assert_ne!(round.next_to_act(), Some(&1));
    round.post(&3, 50).unwrap();
    assert_eq!(round.next_to_act(), None);
}

#[test]
fn posting_out_of_turn_is_an_error() {
    let mut round = BettingRound::new(vec!["A", "B", "C"], [("A", 10), ("B", 20)]);
    let err = round.post(&"B", 20).unwrap_err();
    assert_eq!(
        err,
        BettingError::NotPlayersTurn {
            expected: "\"C\"".to_string(),
            actual: "\"B\"".to_string(),
        }
    );
}

#[test]
fn pot_limit_policy_caps_raises() {
    let mut round = BettingRound::with_limit(
        vec!["A", "B", "C"],
        [("A", 10), ("B", 20)],
        0,
        Box::new(PotLimit),
    );
    // pot 30, facing 20: at most 30 + 2 * 20
    assert_eq!(
        round.post(&"C", 71),
        Err(BettingError::IllegalBet { amount: 71 })
    );
    assert_eq!(round.post(&"C", 70), Ok(PostOutcome::Accepted));
    assert_eq!(round.pot_summary(), (100, 70));
}

#[test]
fn carried_pot_affects_pot_odds() {
    let round = BettingRound::with_pot(vec!["A", "B"], Vec::new(), 200);
    assert_eq!(round.pot_odds(&"A"), Some(0.0));
    assert_eq!(round.announcements()[0], "Match pot 200");
}

#[test]
fn blind_manager_seeds_consecutive_hands() {
    let mut blinds = BlindManager::new(
        vec!["A", "B", "C", "D"],
        Blinds::new(10, 20).unwrap(),
        10,
        Box::new(FixedSchedule),
    )
    .unwrap();

    let round = BettingRound::new(blinds.players().to_vec(), blinds.forced_bets());
    assert_eq!(round.next_to_act(), Some(&"C"));

    blinds.advance_hand();
    let round = BettingRound::new(blinds.players().to_vec(), blinds.forced_bets());
    assert_eq!(round.bet(&"B"), Some(10));
    assert_eq!(round.bet(&"C"), Some(20));
    assert_eq!(round.next_to_act(), Some(&"A"));
}
