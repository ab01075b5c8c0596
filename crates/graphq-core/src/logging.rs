use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Emit a trace event carrying the time elapsed since `$start`.
///
/// ```rust,ignore
/// let started = Instant::now();
/// trace_time!(started, "dijkstra", settled = count);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Per-query step tracer.
///
/// Emits `debug` events only when the query was started with `debug`
/// enabled, so a disabled tracer costs one branch per step and never
/// touches algorithm state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepTracer {
    enabled: bool,
    algorithm: &'static str,
}

impl StepTracer {
    pub fn new(algorithm: &'static str, enabled: bool) -> Self {
        Self { enabled, algorithm }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a settled/visited node
    pub fn settle(&self, step: usize, node: &str, distance: f64) {
        if self.enabled {
            tracing::debug!(algorithm = self.algorithm, step, node, distance, "settle");
        }
    }

    /// Record a traversal visit that carries no distance
    pub fn visit(&self, step: usize, node: &str) {
        if self.enabled {
            tracing::debug!(algorithm = self.algorithm, step, node, "visit");
        }
    }

    /// Record a successful relaxation through an edge
    pub fn relax(&self, edge: &str, target: &str, distance: f64) {
        if self.enabled {
            tracing::debug!(algorithm = self.algorithm, edge, target, distance, "relax");
        }
    }

    /// Record a free-form step message
    pub fn note(&self, message: &str) {
        if self.enabled {
            tracing::debug!(algorithm = self.algorithm, "{}", message);
        }
    }
}

/// Filter directives for the graphq crates.
///
/// An explicit level wins over `verbose`; a level that already contains a
/// directive (`graphq_core=trace`) is used as is.
pub fn filter_directives(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(directive) if directive.contains('=') => directive.to_string(),
        Some(level) => format!("graphq={level},graphq_core={level}"),
        None if verbose => "graphq=debug,graphq_core=debug".to_string(),
        None => "graphq=warn,graphq_core=warn".to_string(),
    }
}

/// Install the global subscriber: compact text or JSON lines on stderr.
///
/// `RUST_LOG`, then `GRAPHQ_LOG`, override the computed directives.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPHQ_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose, log_level)));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false);
    let subscriber = tracing_subscriber::registry().with(filter);

    if log_json {
        subscriber
            .with(
                stderr_layer
                    .json()
                    .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        subscriber
            .with(stderr_layer.compact().with_target(false))
            .try_init()?;
    }
    Ok(())
}
