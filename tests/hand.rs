//! Card and hand integration tests.

use pbnrs::{Card, Hand, ParseCardError, ParseHandError, Rank, Suit};

#[test]
fn card_short_code_round_trip() {
    assert_eq!("AS".parse::<Card>(), Ok(Card::SA));
    assert_eq!("5C".parse::<Card>(), Ok(Card::C5));
    assert_eq!("TH".parse::<Card>(), Ok(Card::HT));
    assert_eq!(Card::SA.to_string(), "AS");
    assert_eq!(Card::C5.to_string(), "5C");
    assert_eq!(Card::new(Rank::Ten, Suit::Diamonds), Card::DT);
}

#[test]
fn card_parse_errors() {
    assert_eq!("A".parse::<Card>(), Err(ParseCardError::Length));
    assert_eq!("ASX".parse::<Card>(), Err(ParseCardError::Length));
    assert_eq!("XS".parse::<Card>(), Err(ParseCardError::Rank('X')));
    assert_eq!("AZ".parse::<Card>(), Err(ParseCardError::Suit('Z')));
}

#[test]
fn suit_helpers() {
    assert_eq!(Suit::from_char('H'), Some(Suit::Hearts));
    assert_eq!(Suit::from_char('x'), None);
    assert_eq!(Suit::Spades.symbol(), '♠');
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Clubs.is_red());
    assert!(Suit::Clubs < Suit::Diamonds);
    assert!(Suit::Diamonds < Suit::Hearts);
    assert!(Suit::Hearts < Suit::Spades);
}

#[test]
fn rank_hcp_values() {
    assert_eq!(Rank::Ace.hcp(), 4);
    assert_eq!(Rank::King.hcp(), 3);
    assert_eq!(Rank::Queen.hcp(), 2);
    assert_eq!(Rank::Jack.hcp(), 1);
    assert_eq!(Rank::Ten.hcp(), 0);
    assert_eq!(Rank::Two.hcp(), 0);
}

#[test]
fn sorts_descending_by_suit() {
    let mut hand = Hand::new();
    hand.add_card(Card::CA);
    hand.add_card(Card::DA);
    hand.add_card(Card::HA);
    hand.add_card(Card::SA);
    hand.sort();
    assert_eq!(hand.cards(), [Card::SA, Card::HA, Card::DA, Card::CA]);
}

#[test]
fn sorts_descending_by_rank_within_suit() {
    let mut hand: Hand = [Card::S2, Card::SJ, Card::SA, Card::ST, Card::SK, Card::SQ]
        .into_iter()
        .collect();
    hand.sort();
    assert_eq!(
        hand.cards(),
        [Card::SA, Card::SK, Card::SQ, Card::SJ, Card::ST, Card::S2]
    );
}

#[test]
fn renders_space_separated_short_codes() {
    let mut hand: Hand = [Card::CA, Card::DA, Card::HA, Card::SA].into_iter().collect();
    assert_eq!(hand.sort().to_string(), "AS AH AD AC");
    assert_eq!(Hand::new().to_string(), "");
}

#[test]
fn filters_cards_by_suit() {
    let mut hand: Hand = [Card::CA, Card::SK, Card::DA, Card::HA, Card::SA]
        .into_iter()
        .collect();
    hand.sort();

    let spades: Vec<Card> = hand.cards_in_suit(Suit::Spades).collect();
    assert_eq!(spades, [Card::SA, Card::SK]);
    assert_eq!(hand.cards_in_suit(Suit::Hearts).count(), 1);

    let empty: Hand = [Card::SA].into_iter().collect();
    assert_eq!(empty.cards_in_suit(Suit::Clubs).count(), 0);
}

#[test]
fn encodes_empty_hand_as_dash() {
    assert_eq!(Hand::new().to_pbn(), "-");

    let hand = Hand::from_pbn("-").unwrap();
    assert!(hand.is_empty());
}

#[test]
fn encodes_missing_suits_as_empty_groups() {
    // No spades: leading empty group.
    let hand: Hand = [
        Card::HA,
        Card::HT,
        Card::DJ,
        Card::D6,
        Card::D5,
        Card::D4,
        Card::D2,
        Card::CK,
        Card::CQ,
        Card::CT,
        Card::C8,
        Card::C5,
        Card::C2,
    ]
    .into_iter()
    .collect();
    assert_eq!(hand.to_pbn(), ".AT.J6542.KQT852");
}

#[test]
fn to_pbn_sorts_each_suit_group() {
    // Cards are appended out of order; the encoder sorts per group.
    let hand = Hand::from_pbn("2TQK..J6542.AT85").unwrap();
    assert_eq!(hand.to_pbn(), "KQT2..J6542.AT85");
}

#[test]
fn pbn_round_trips() {
    for pbn in [
        ".AT.J6542.KQT852",
        "KQT2..J6542.AT85",
        "KQT852.AJT6542..",
        ".AKQJT98765432..",
        "A432.K432.QJ3.JT",
    ] {
        let hand = Hand::from_pbn(pbn).unwrap();
        assert_eq!(hand.to_pbn(), pbn, "round trip failed for {pbn}");
    }

    // Four empty groups parse fine but re-encode as the empty-hand dash.
    let hand = Hand::from_pbn("...").unwrap();
    assert!(hand.is_empty());
    assert_eq!(hand.to_pbn(), "-");
}

#[test]
fn parse_preserves_group_order() {
    let hand = Hand::from_pbn("AK.Q.J.T").unwrap();
    assert_eq!(
        hand.cards(),
        [Card::SA, Card::SK, Card::HQ, Card::DJ, Card::CT]
    );
}

#[test]
fn parse_requires_four_suit_groups() {
    let err = Hand::from_pbn("AKQJT").unwrap_err();
    assert_eq!(err, ParseHandError::MissingSuits);
    assert_eq!(err.to_string(), "All four suits must be declared.");

    assert_eq!(
        Hand::from_pbn("A.K.Q"),
        Err(ParseHandError::MissingSuits)
    );
    assert_eq!(
        Hand::from_pbn("A.K.Q.J.T"),
        Err(ParseHandError::MissingSuits)
    );
}

#[test]
fn parse_rejects_unknown_rank_characters() {
    let err = Hand::from_pbn("AX.K.Q.J").unwrap_err();
    assert_eq!(
        err,
        ParseHandError::UnknownCard {
            rank: 'X',
            suit: Suit::Spades,
        }
    );
    assert_eq!(err.to_string(), "no such card 'XS'");

    assert_eq!(
        Hand::from_pbn("A.K.Q.1"),
        Err(ParseHandError::UnknownCard {
            rank: '1',
            suit: Suit::Clubs,
        })
    );
}

#[test]
fn parse_is_permissive_beyond_group_count() {
    // Duplicates and non-bridge hand sizes are the caller's problem.
    let dupes = Hand::from_pbn("AA...").unwrap();
    assert_eq!(dupes.cards(), [Card::SA, Card::SA]);

    let one = Hand::from_pbn("..A.").unwrap();
    assert_eq!(one.len(), 1);
}

#[test]
fn hcp_sums_honor_values() {
    let hand = Hand::from_pbn("A432.K432.QJ3.JT").unwrap();
    assert_eq!(hand.hcp(), 11);

    assert_eq!(Hand::new().hcp(), 0);

    // Order-independent: no sort needed.
    let unsorted: Hand = [Card::C2, Card::SA, Card::DK].into_iter().collect();
    assert_eq!(unsorted.hcp(), 7);
}

#[test]
fn hcp_saturates_on_oversized_hands() {
    // Parsing accepts arbitrarily large hands, so scoring must not overflow.
    let pbn = format!("{}...", "A".repeat(64));
    let hand = Hand::from_pbn(&pbn).unwrap();
    assert_eq!(hand.len(), 64);
    assert_eq!(hand.hcp(), u8::MAX);
}

#[test]
fn extend_appends_cards_in_order() {
    let mut hand: Hand = [Card::SA].into_iter().collect();
    hand.extend([Card::HK, Card::C2]);
    assert_eq!(hand.cards(), [Card::SA, Card::HK, Card::C2]);
}

#[test]
fn remove_card_drops_first_occurrence() {
    let mut hand: Hand = [Card::SA, Card::HA, Card::SA].into_iter().collect();
    assert!(hand.remove_card(Card::SA));
    assert_eq!(hand.cards(), [Card::HA, Card::SA]);
    assert!(!hand.remove_card(Card::C2));
    assert_eq!(hand.len(), 2);
}
