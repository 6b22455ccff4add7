//! One-call entry point that picks the strategy from the configuration.

use sc_core::{SwarmConfig, Variant};
use sc_population::{Configuration, Target};

use crate::{
    CancelToken, DispersiveWalk, EngineBuilder, EngineObserver, EngineResult, HybridSwarm,
    RunOutcome,
};

/// Validate, build, and run a complete optimisation.
///
/// Dispatches on `config.variant`.  Configuration problems are reported
/// before the first iteration; once running, the call always returns the
/// best result found, whether the budget ran out, the swarm converged, or
/// `cancel` was set.
pub fn run<O: EngineObserver>(
    targets:  Vec<Target>,
    initial:  Configuration,
    config:   SwarmConfig,
    cancel:   CancelToken,
    observer: &mut O,
) -> EngineResult<RunOutcome> {
    let outcome = match config.variant {
        Variant::Dispersive => {
            let strategy = DispersiveWalk::from_config(&config);
            EngineBuilder::new(config, targets, initial, strategy)
                .cancel_token(cancel)
                .build()?
                .run(observer)
        }
        Variant::Hybrid => {
            let strategy = HybridSwarm::from_config(&config);
            EngineBuilder::new(config, targets, initial, strategy)
                .cancel_token(cancel)
                .build()?
                .run(observer)
        }
    };
    Ok(outcome)
}
