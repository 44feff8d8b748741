use crate::Card;

/// Calculate the value of a blackjack hand.
/// Aces count as 11 until the total exceeds 21, then demote one at a
/// time to 1.
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut total: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        let value = card.value() as u16;
        if value == 11 {
            aces += 1;
        }
        total += value;
    }

    while total > 21 && aces > 0 {
        total -= 10; // Count ace as 1 instead of 11
        aces -= 1;
    }

    total.min(u8::MAX as u16) as u8
}

/// Check if a hand is busted
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > 21
}
