//! Keyword search over the built-in destination advice

use crate::task::{Pending, Spawner, TaskPoll};
use crate::types::AdviceEntry;
use std::time::Duration;
use tracing::{debug, info};

pub const ADVICE_ENTRIES: [AdviceEntry; 5] = [
    AdviceEntry {
        id: 1,
        destination: "Paris, France",
        advice: "Visit the Eiffel Tower, Louvre Museum, and enjoy a Seine River cruise. Try local pastries!",
    },
    AdviceEntry {
        id: 2,
        destination: "Kyoto, Japan",
        advice: "Explore ancient temples like Kinkaku-ji, walk through Arashiyama Bamboo Grove, and experience a traditional tea ceremony.",
    },
    AdviceEntry {
        id: 3,
        destination: "Rio de Janeiro, Brazil",
        advice: "Relax on Copacabana Beach, hike Sugarloaf Mountain, and see the Christ the Redeemer statue.",
    },
    AdviceEntry {
        id: 4,
        destination: "Cairo, Egypt",
        advice: "Discover the Pyramids of Giza, explore the Egyptian Museum, and take a felucca ride on the Nile.",
    },
    AdviceEntry {
        id: 5,
        destination: "Sydney, Australia",
        advice: "See the Sydney Opera House, climb the Sydney Harbour Bridge, and visit Bondi Beach.",
    },
];

/// Case-insensitive substring match on destination or advice, in list order.
/// A blank query matches nothing.
pub fn search(query: &str) -> Vec<AdviceEntry> {
    search_in(&ADVICE_ENTRIES, query)
}

fn search_in(entries: &[AdviceEntry], query: &str) -> Vec<AdviceEntry> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.destination.to_lowercase().contains(&needle)
                || e.advice.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}

/// Search box state. Each submission runs after an artificial delay and only
/// the latest submission's result is kept.
pub struct AdviceSearch {
    pub(crate) query: String,
    results: Vec<AdviceEntry>,
    generation: u64,
    task: Option<(u64, Pending<Vec<AdviceEntry>>)>,
    delay: Duration,
}

impl AdviceSearch {
    pub fn new(delay: Duration) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            generation: 0,
            task: None,
            delay,
        }
    }

    pub fn submit(&mut self, spawner: &Spawner) {
        self.generation += 1;
        if let Some((stale, _)) = self.task.take() {
            debug!(generation = stale, "Discarding superseded search");
        }

        if self.query.trim().is_empty() {
            self.results.clear();
            return;
        }

        let query = self.query.clone();
        let delay = self.delay;
        info!(query = %query, generation = self.generation, "Searching advice");
        let pending = spawner.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            search(&query)
        });
        self.task = Some((self.generation, pending));
    }

    /// Returns true when a search finished this call.
    pub fn poll(&mut self) -> bool {
        let Some((generation, task)) = self.task.as_mut() else {
            return false;
        };
        let generation = *generation;
        match task.poll() {
            TaskPoll::Running => false,
            TaskPoll::Ready(results) => {
                debug!(generation, matches = results.len(), "Search finished");
                self.results = results;
                self.task = None;
                true
            }
            TaskPoll::Abandoned => {
                self.task = None;
                true
            }
        }
    }

    pub fn is_searching(&self) -> bool {
        self.task.is_some()
    }

    pub fn results(&self) -> &[AdviceEntry] {
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[AdviceEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn blank_query_matches_nothing() {
        assert!(search("").is_empty());
        assert!(search("   ").is_empty());
        assert!(search_in(&[], "").is_empty());
    }

    #[test]
    fn matches_destination_case_insensitively() {
        assert_eq!(ids(&search("kyoto")), [2]);
        assert_eq!(ids(&search("KYOTO")), [2]);
        assert_eq!(ids(&search("japan")), [2]);
    }

    #[test]
    fn matches_advice_text() {
        assert_eq!(ids(&search("bondi")), [5]);
        assert_eq!(ids(&search("felucca")), [4]);
    }

    #[test]
    fn keeps_list_order_across_fields() {
        // Rio (Copacabana Beach) and Sydney (Bondi Beach)
        assert_eq!(ids(&search("beach")), [3, 5]);
        assert_eq!(ids(&search("museum")), [1, 4]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(search("zzz-no-match").is_empty());
    }

    #[test]
    fn query_is_not_trimmed_for_matching() {
        assert_eq!(ids(&search(" tower")), [1]);
        assert!(search("paris ").is_empty());
    }

    async fn settle(search: &mut AdviceSearch) {
        for _ in 0..100 {
            if search.poll() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("search did not finish");
    }

    #[tokio::test]
    async fn delayed_search_delivers_results() {
        let spawner = Spawner::current();
        let mut state = AdviceSearch::new(Duration::ZERO);
        state.query = "Cairo".into();
        state.submit(&spawner);
        assert!(state.is_searching());
        settle(&mut state).await;
        assert!(!state.is_searching());
        assert_eq!(ids(state.results()), [4]);
    }

    #[tokio::test(start_paused = true)]
    async fn latest_submission_wins() {
        let spawner = Spawner::current();
        let mut state = AdviceSearch::new(Duration::from_millis(1000));

        state.query = "paris".into();
        state.submit(&spawner);
        state.query = "sydney".into();
        state.submit(&spawner);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        settle(&mut state).await;
        assert_eq!(ids(state.results()), [5]);
        assert!(!state.poll());
    }

    #[tokio::test]
    async fn blank_submission_clears_and_cancels() {
        let spawner = Spawner::current();
        let mut state = AdviceSearch::new(Duration::ZERO);
        state.query = "brazil".into();
        state.submit(&spawner);
        settle(&mut state).await;
        assert_eq!(ids(state.results()), [3]);

        state.query = "egypt".into();
        state.submit(&spawner);
        state.query = "  ".into();
        state.submit(&spawner);
        assert!(!state.is_searching());
        assert!(state.results().is_empty());
        tokio::task::yield_now().await;
        assert!(!state.poll());
        assert!(state.results().is_empty());
    }
}
