//! Observer helpers.
//!
//! An observer is any `FnMut(ProgressData<G, F>) + Send + 'static`. The
//! simulation runs each registered observer on its own thread and feeds
//! it through a private channel, so a slow observer never stalls the
//! generational loop and every observer sees each generation exactly once,
//! in order.

use super::progress::ProgressData;
use crate::core::Fitness;
use log::info;
use std::sync::mpsc::{self, Receiver};

/// Boxed observer callback as stored by the simulation.
pub type Handler<G, F> = Box<dyn FnMut(ProgressData<G, F>) + Send>;

/// An observer that forwards every snapshot into a channel.
///
/// The receiver can be drained after (or during) the run. It disconnects
/// once the simulation that owns the handler is dropped.
///
/// # Examples
///
/// ```
/// use u_evolve::simulation::observer;
///
/// let (handler, progress) = observer::channel::<String, f64>();
/// // simulation.register_observer(handler);
/// drop(handler);
/// assert!(progress.try_iter().next().is_none());
/// ```
pub fn channel<G, F>() -> (impl FnMut(ProgressData<G, F>) + Send + 'static, Receiver<ProgressData<G, F>>)
where
    G: Send + 'static,
    F: Fitness,
{
    let (tx, rx) = mpsc::channel();
    let handler = move |data: ProgressData<G, F>| {
        // A dropped receiver only means nobody is listening any more.
        let _ = tx.send(data);
    };
    (handler, rx)
}

/// An observer that logs every snapshot at `info` level.
pub fn log_progress<G, F>() -> impl FnMut(ProgressData<G, F>) + Send + 'static
where
    G: 'static,
    F: Fitness,
{
    |data: ProgressData<G, F>| {
        let variance = data
            .variance
            .map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"));
        match &data.best {
            Some(best) => info!(
                "gen {:>6}  mean={:.4}  var={}  best={:?}  elapsed={:.2?}",
                data.generation, data.mean_fitness, variance, best.fitness, data.elapsed
            ),
            None => info!(
                "gen {:>6}  mean={:.4}  var={}  elapsed={:.2?}",
                data.generation, data.mean_fitness, variance, data.elapsed
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn snapshot(generation: u64) -> ProgressData<String, f64> {
        ProgressData {
            generation,
            mean_fitness: 1.0,
            variance: None,
            elapsed: Duration::from_millis(generation),
            best: None,
        }
    }

    #[test]
    fn test_channel_forwards_in_order() {
        let (mut handler, rx) = channel::<String, f64>();
        for g in 1..=3 {
            handler(snapshot(g));
        }
        drop(handler);

        let generations: Vec<u64> = rx.iter().map(|d| d.generation).collect();
        assert_eq!(generations, vec![1, 2, 3]);
    }

    #[test]
    fn test_channel_survives_dropped_receiver() {
        let (mut handler, rx) = channel::<String, f64>();
        drop(rx);
        handler(snapshot(1));
    }

    #[test]
    fn test_log_progress_accepts_snapshots() {
        let mut handler = log_progress::<String, f64>();
        handler(snapshot(1));
        handler(ProgressData {
            variance: Some(0.5),
            best: Some(crate::core::Candidate::with_fitness("x".to_string(), 0.0)),
            ..snapshot(2)
        });
    }
}
