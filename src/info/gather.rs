//! Parallel probe execution.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::thread;

use super::cache::CommandCache;
use super::probes::Probe;
use crate::protocol::Environment;

/// Run `f` for every probe on its own scoped thread.
///
/// Returns once every worker has finished. A worker that panics leaves its
/// probe out of the result.
pub fn gather_with<F>(probes: &[Probe], f: F) -> HashMap<Probe, String>
where
    F: Fn(Probe) -> String + Sync,
{
    let results = Mutex::new(HashMap::with_capacity(probes.len()));

    thread::scope(|scope| {
        let handles: Vec<_> = probes
            .iter()
            .map(|&probe| {
                let (f, results) = (&f, &results);
                scope.spawn(move || {
                    let value = f(probe);
                    results
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .insert(probe, value);
                })
            })
            .collect();

        for (probe, handle) in probes.iter().zip(handles) {
            if handle.join().is_err() {
                log::warn!("{} probe panicked", probe.label());
            }
        }
    });

    results.into_inner().unwrap_or_else(PoisonError::into_inner)
}

/// Gather every probe in parallel against a shared command cache.
pub fn gather_parallel(
    probes: &[Probe],
    cache: &CommandCache,
    env: &dyn Environment,
) -> HashMap<Probe, String> {
    gather_with(probes, |probe| {
        let value = probe.gather(cache, env);
        log::debug!("{}: {}", probe.label(), value);
        value
    })
}
