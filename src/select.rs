//! Picking the highlight card out of a run's results

use rand::rng;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::SelectionStrategy;
use crate::extract::FeedCard;

/// Pick the card for the single-card artifact.
pub fn pick_single(cards: &[FeedCard], strategy: SelectionStrategy) -> Option<FeedCard> {
    pick_single_with(cards, strategy, &mut rng())
}

/// Same as [`pick_single`], with a caller-supplied source of randomness.
pub fn pick_single_with<R: Rng + ?Sized>(
    cards: &[FeedCard],
    strategy: SelectionStrategy,
    rng: &mut R,
) -> Option<FeedCard> {
    if cards.is_empty() {
        return None;
    }

    match strategy {
        SelectionStrategy::Random => cards.choose(rng).cloned(),
        SelectionStrategy::Latest => {
            let mut by_date: Vec<&FeedCard> = cards.iter().collect();
            // Stable sort: among equal timestamps the earliest card wins.
            by_date.sort_by(|a, b| b.published_at.cmp(&a.published_at));
            by_date.first().map(|card| (*card).clone())
        }
        SelectionStrategy::First | SelectionStrategy::Unknown => cards.first().cloned(),
    }
}
