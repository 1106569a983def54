//! The built-in call chains.
//!
//! Naming inside the chains is deliberately short (a, b, c...) so the
//! rendered listings read like stack listings rather than prose.

use super::{Scenario, ScenarioState, Unwind};
use crate::capture::{traced, TraceEmitter};

/// Three nested calls returning normally, then a top-level sibling.
///
/// The full unwind back to top level before `d` produces a second root in
/// the reconstructed tree.
pub struct NestedReturn;

impl Scenario for NestedReturn {
    fn name(&self) -> &'static str {
        "nested-return"
    }

    fn description(&self) -> &'static str {
        "a>b>c returning normally, then a second top-level call"
    }

    fn run(&self, emitter: &mut dyn TraceEmitter, state: &mut ScenarioState) {
        traced(emitter, "a", |em| {
            traced(em, "b", |em| {
                traced(em, "c", |_| state.tick());
            });
        });
        traced(emitter, "d", |_| state.tick());
    }

    fn expected_listing(&self) -> &'static str {
        "a\n  b\n    c\nd\n"
    }
}

/// The root call fails immediately; the harness frame swallows the error.
///
/// The call that would have followed the failing one is never entered, so it
/// leaves no record at all.
pub struct UnwindAtRoot;

impl Scenario for UnwindAtRoot {
    fn name(&self) -> &'static str {
        "unwind-at-root"
    }

    fn description(&self) -> &'static str {
        "root call unwinds on its first callee, error swallowed at top"
    }

    fn run(&self, emitter: &mut dyn TraceEmitter, state: &mut ScenarioState) {
        let result = traced(emitter, "run", |em| -> Result<(), Unwind> {
            traced(em, "explode", |_| -> Result<(), Unwind> {
                state.tick();
                Err(Unwind)
            })?;
            traced(em, "skipped", |_| -> Result<(), Unwind> { Ok(()) })?;
            Ok(())
        });
        // Swallowed, as the harness frame would.
        let _ = result;
    }

    fn expected_listing(&self) -> &'static str {
        "run\n  explode\n"
    }
}

/// A deep callee fails, a middle frame swallows the error and keeps going.
///
/// The failing frame's EXIT comes from unwinding; its sibling `d` is a
/// normal call afterwards. The two are indistinguishable in the listing.
pub struct UnwindMidChain;

impl Scenario for UnwindMidChain {
    fn name(&self) -> &'static str {
        "unwind-mid-chain"
    }

    fn description(&self) -> &'static str {
        "a>b>c where c unwinds, b recovers and calls d"
    }

    fn run(&self, emitter: &mut dyn TraceEmitter, state: &mut ScenarioState) {
        traced(emitter, "a", |em| {
            traced(em, "b", |em| {
                let failed: Result<(), Unwind> = traced(em, "c", |_| Err(Unwind));
                let _ = failed;
                traced(em, "d", |_| state.tick());
            });
        });
    }

    fn expected_listing(&self) -> &'static str {
        "a\n  b\n    c\n    d\n"
    }
}

/// An error crosses an uninstrumented foreign boundary.
///
/// The dispatch itself leaves no frame; only the traced code on either side
/// of it shows up, so the re-entered chain renders as a direct child of the
/// frame that crossed the boundary.
pub struct UnwindThroughCallback;

type ForeignCallback = fn(&mut dyn TraceEmitter, &mut ScenarioState) -> Result<(), Unwind>;

/// Function-pointer dispatch standing in for a native boundary.
fn dispatch_foreign(
    emitter: &mut dyn TraceEmitter,
    callback: ForeignCallback,
    state: &mut ScenarioState,
) -> Result<(), Unwind> {
    callback(emitter, state)
}

fn reentry_callback(
    emitter: &mut dyn TraceEmitter,
    state: &mut ScenarioState,
) -> Result<(), Unwind> {
    traced(emitter, "reentered", |em| {
        traced(em, "explode", |_| {
            state.tick();
            Err(Unwind)
        })
    })
}

impl Scenario for UnwindThroughCallback {
    fn name(&self) -> &'static str {
        "unwind-through-callback"
    }

    fn description(&self) -> &'static str {
        "callback re-enters traced code, unwinds back across the boundary"
    }

    fn run(&self, emitter: &mut dyn TraceEmitter, state: &mut ScenarioState) {
        traced(emitter, "a", |em| {
            traced(em, "b", |_| state.tick());
            let crossed = dispatch_foreign(em, reentry_callback, state);
            let _ = crossed;
            traced(em, "d", |_| state.tick());
        });
    }

    fn expected_listing(&self) -> &'static str {
        "a\n  b\n  reentered\n    explode\n  d\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::FileEmitter;

    // Records against an inactive emitter are dropped, so a scenario can run
    // "dark" to check the state contract without touching disk.
    #[test]
    fn test_chains_tick_leaf_work() {
        let mut emitter = FileEmitter::new();
        let mut state = ScenarioState::new();

        NestedReturn.run(&mut emitter, &mut state);
        assert_eq!(state.leaf_calls, 2);

        UnwindThroughCallback.run(&mut emitter, &mut state);
        assert_eq!(state.leaf_calls, 5);

        assert!(!emitter.is_active());
    }
}
