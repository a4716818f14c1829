//! Strategy cascade.
//!
//! Strategies run in [`Strategy::ALL`] order. The first one to produce a
//! candidate ends the cascade; its candidates alone go to the finalizer.
//! Running out of strategies is a normal, empty outcome.

use tracing::debug;

use super::{finalize, Strategy};
use crate::dom::Container;
use crate::options::Options;
use crate::result::{Candidate, ExtractResult};

/// Candidates produced by the cascade, with the strategy that found them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Winning strategy, `None` if every strategy came up empty.
    pub strategy: Option<Strategy>,
    pub candidates: Vec<Candidate>,
}

/// Try each strategy in turn and stop at the first non-empty result.
pub fn run_cascade<C: Container>(root: &C, options: &Options) -> CascadeOutcome {
    for strategy in Strategy::ALL {
        debug!(%strategy, "trying extraction strategy");
        let candidates = strategy.run(root, options);
        if !candidates.is_empty() {
            debug!(%strategy, candidates = candidates.len(), "strategy produced candidates");
            return CascadeOutcome {
                strategy: Some(strategy),
                candidates,
            };
        }
    }

    debug!("no strategy produced candidates");
    CascadeOutcome::default()
}

/// Run the full pipeline (cascade then finalize) over a container.
pub fn extract_from_container<C: Container>(root: &C, options: &Options) -> ExtractResult {
    let CascadeOutcome {
        strategy,
        candidates,
    } = run_cascade(root, options);
    let candidates_found = candidates.len();
    let parties = finalize(candidates);

    debug!(
        strategy = strategy.map_or("none", Strategy::name),
        candidates_found,
        parties = parties.len(),
        "extraction finished"
    );

    ExtractResult {
        parties,
        strategy,
        candidates_found,
    }
}
