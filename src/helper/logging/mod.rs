use std::any::Any;
use std::io;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use color_eyre::{eyre, Report};
use lazy_static::lazy_static;
use tracing::field::{display, DisplayValue};
use tracing_subscriber::filter::{filter_fn, Directive};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{format, time};

use crate::config::tracing_config::{ErrorLogStyle, TracingConfig};

pub mod event_targets;

/// Logs an expression's string representation and returns the original expression. The format string can also be customised in the second overload
///
/// ### Examples:
///
/// `let platform = log_expr!(WinitPlatform::init(&mut imgui))` prints ```run `WinitPlatform::init(&mut imgui)` ``` and returns whatever value the expression returned
#[macro_export]
macro_rules! log_expr {
    ($expression:expr) => {
        $crate::log_expr!($expression, expr, "run `{expr}`")
    };
    ($expression:expr, $expression_name:ident, $format_and_args:tt) => {{
        let value = $expression;
        tracing::trace!($format_and_args, $expression_name = stringify!($expression));
        value
    }};
}

/// Same as [log_expr], but also logs the value the expression evaluated to
#[macro_export]
macro_rules! log_expr_val {
    ($expression:expr) => {
        $crate::log_expr_val!($expression, expr, val, "eval `{expr}` => {val}")
    };
    ($expression:expr, Debug) => {
        $crate::log_expr_val!($expression, expr, val, "eval `{expr}` => {val:?}")
    };
    ($expression:expr, $expression_name:ident, $value_name:ident, $format_and_args:tt) => {{
        let $value_name = $expression;
        tracing::trace!(
            $format_and_args,
            $expression_name = stringify!($expression),
            $value_name = $value_name
        );
        $value_name
    }};
}

lazy_static! {
    /// How [format_error] formats reports. Set once from config by [init_tracing]
    static ref ERROR_LOG_STYLE: Mutex<ErrorLogStyle> = Mutex::new(ErrorLogStyle::default());
}

fn error_log_style() -> ErrorLogStyle {
    match ERROR_LOG_STYLE.lock() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Sets up the global [tracing] subscriber according to the [TracingConfig]
pub fn init_tracing(config: &TracingConfig) -> eyre::Result<()> {
    use tracing_error::*;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    match ERROR_LOG_STYLE.lock() {
        Ok(mut guard) => *guard = config.error_style,
        Err(poisoned) => *poisoned.into_inner() = config.error_style,
    }

    let default_directive = config
        .default_directive
        .parse::<Directive>()
        .wrap_err_with(|| format!("invalid default log directive {:?}", config.default_directive))?;

    let standard_format = format()
        .compact()
        .with_ansi(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_target(false)
        .with_level(true)
        .with_timer(time::uptime())
        .with_source_location(false);

    let target_filter_config = config.clone();
    let standard_layer = fmt::layer()
        .with_span_events(FmtSpan::NONE)
        .log_internal_errors(true)
        .event_format(standard_format)
        .with_writer(io::stdout)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(default_directive)
                .from_env_lossy(),
        )
        .with_filter(filter_fn(move |metadata| {
            target_filter_config.target_enabled(metadata.target())
        }));

    let error_layer = ErrorLayer::default();

    tracing_subscriber::registry()
        .with(standard_layer)
        .with(error_layer)
        .try_init()
        .wrap_err("could not install global tracing subscriber")?;

    Ok(())
}

/// Formats an error in whichever way the app is configured to log errors, ready to be passed as a [tracing] field
pub fn format_error(report: &Report) -> DisplayValue<String> {
    display(format_error_string(report))
}

pub fn format_error_string(report: &Report) -> String {
    format_error_with_style(report, error_log_style())
}

pub fn format_error_with_style(report: &Report, style: ErrorLogStyle) -> String {
    match style {
        ErrorLogStyle::Short => format!("{}", report),
        ErrorLogStyle::ShortWithCause => format!("{:#}", report),
        ErrorLogStyle::WithBacktrace => format!("{:?}", report),
        ErrorLogStyle::Debug => format!("{:#?}", report),
    }
}

/// Converts a panic payload (`&(dyn Any + Send)`) to a readable message
///
/// Panics raised with `panic!("literal")` carry a `&str`, formatted panics carry a [String]; anything else can't be inspected
pub fn panic_payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(report) = payload.downcast_ref::<Report>() {
        format_error_string(report)
    } else {
        "<unable to convert panic, does not implement any known types>".to_string()
    }
}
