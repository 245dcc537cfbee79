use crate::cli::{Cli, Command, InputArgs, OutputFormat, ValidateArgs};
use colored::*;
use error_common::{ErrorContext, ErrorReport, ErrorReporter, Result, TransportError};
use options_engine::{
    FieldError, JsonFileProvider, JsonTextProvider, OptionField, OptionsError, OptionsProvider,
    RawOptions, SimulationOptions, Validator, ValidatorSettings,
};
use std::io::{Read, Write};
use std::path::Path;

/// How a command ended when it did not fail outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    /// The payload was rejected; the caller maps this to exit code 2
    Rejected,
}

/// Result of validating one payload
#[derive(Debug)]
pub enum Checked {
    Accepted(SimulationOptions),
    Rejected(ErrorReport<FieldError>),
}

/// Run the parsed command, writing results to `out`
///
/// # Errors
///
/// Fails on unreadable input, bad settings, invalid defaults or output
/// failures. A rejected payload is not an error; it yields [`Outcome::Rejected`].
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome> {
    match &cli.command {
        Command::Validate(args) => validate(args, out),
        Command::Cards(input) => cards(input, out),
        Command::Defaults { pretty } => defaults(*pretty, out),
    }
}

fn validate<W: Write>(args: &ValidateArgs, out: &mut W) -> Result<Outcome> {
    match prepare(&args.input)? {
        Checked::Accepted(options) => {
            match args.format {
                OutputFormat::Json => write_json(out, &options, true)?,
                OutputFormat::Text => write_options_text(out, &options)?,
            }
            Ok(Outcome::Accepted)
        }
        Checked::Rejected(report) => {
            match args.format {
                OutputFormat::Json => write_json(out, &report, true)?,
                OutputFormat::Text => write_report_text(out, &report)?,
            }
            Ok(Outcome::Rejected)
        }
    }
}

fn cards<W: Write>(input: &InputArgs, out: &mut W) -> Result<Outcome> {
    match prepare(input)? {
        Checked::Accepted(options) => {
            let text = beam_cards::serialize(&options)?;
            out.write_all(text.as_bytes())?;
            Ok(Outcome::Accepted)
        }
        Checked::Rejected(report) => {
            write_report_text(out, &report)?;
            Ok(Outcome::Rejected)
        }
    }
}

fn defaults<W: Write>(pretty: bool, out: &mut W) -> Result<Outcome> {
    write_json(out, &SimulationOptions::default(), pretty)?;
    Ok(Outcome::Accepted)
}

fn prepare(input: &InputArgs) -> Result<Checked> {
    let settings = ValidatorSettings::load(input.settings.as_deref())?;
    let validator = Validator::new(settings);
    let defaults = load_defaults(&validator, input.defaults.as_deref())?;
    let raw = load_payload(&input.file)?;

    let mut context =
        ErrorContext::new().add_context("source", input.file.display().to_string());
    if let Some(identity) = &input.submitted_by {
        context = context.with_submitted_by(identity.clone());
    }
    if let Some(request_id) = &input.request_id {
        context = context.with_request_id(request_id.clone());
    }

    check(&validator, &raw, &defaults, context)
}

/// Validate `raw` over `defaults`, turning a rejection into a reported
/// [`ErrorReport`]
///
/// # Errors
///
/// Fails for anything other than a rejected payload, e.g. invalid defaults.
pub fn check(
    validator: &Validator,
    raw: &RawOptions,
    defaults: &SimulationOptions,
    context: ErrorContext,
) -> Result<Checked> {
    match validator.validate(raw, defaults) {
        Ok(options) => {
            tracing::info!(keys = raw.len(), "Simulation options accepted");
            Ok(Checked::Accepted(options))
        }
        Err(OptionsError::Invalid(errors)) => {
            let report = ErrorReport::new(context, errors.into_inner());
            ErrorReporter::new().report(&report);
            Ok(Checked::Rejected(report))
        }
        Err(other) => Err(other.into()),
    }
}

/// Defaults from `path`, validated over the built-in defaults
///
/// # Errors
///
/// An unreadable file fails as I/O; a file that does not validate is a
/// [`TransportError::PreconditionError`].
pub fn load_defaults(validator: &Validator, path: Option<&Path>) -> Result<SimulationOptions> {
    let builtin = SimulationOptions::default();
    let Some(path) = path else {
        return Ok(builtin);
    };

    let raw = JsonFileProvider::new(path).load()?;
    validator.validate(&raw, &builtin).map_err(|err| match err {
        OptionsError::Invalid(errors) => TransportError::PreconditionError(format!(
            "defaults file {} is invalid: {errors}",
            path.display()
        )),
        other => other.into(),
    })
}

fn load_payload(path: &Path) -> Result<RawOptions> {
    if path == Path::new("-") {
        return read_payload(std::io::stdin().lock());
    }
    Ok(JsonFileProvider::new(path).load()?)
}

fn read_payload<R: Read>(mut reader: R) -> Result<RawOptions> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(JsonTextProvider::new(text).load()?)
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Human-readable listing of accepted options, one field per line
///
/// # Errors
///
/// Fails when `out` cannot be written.
pub fn write_options_text<W: Write>(out: &mut W, options: &SimulationOptions) -> Result<()> {
    writeln!(out, "{}", "Simulation options accepted".green().bold())?;
    for field in OptionField::ALL {
        writeln!(out, "  {:<34} {}", field.wire_name(), options.value_of(field))?;
    }
    Ok(())
}

/// Human-readable listing of a rejection, one error per line in report order
///
/// # Errors
///
/// Fails when `out` cannot be written.
pub fn write_report_text<W: Write>(out: &mut W, report: &ErrorReport<FieldError>) -> Result<()> {
    writeln!(
        out,
        "{} ({} error{}, report {})",
        "Simulation options rejected".red().bold(),
        report.errors.len(),
        if report.errors.len() == 1 { "" } else { "s" },
        report.report_id
    )?;
    for error in &report.errors {
        write!(
            out,
            "  {} [{}] {}",
            error.field.yellow(),
            error.kind.code(),
            error.message
        )?;
        if let Some(related) = &error.related_field {
            write!(out, " (see {related})")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use options_engine::{UnknownKeyPolicy, ValidationErrorKind};

    fn rendered(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_check_accepts_valid_payload() {
        let raw = RawOptions::new().with("numberOfGeneratedParticles", 5000);
        let checked = check(
            &Validator::default(),
            &raw,
            &SimulationOptions::default(),
            ErrorContext::new(),
        )
        .unwrap();

        match checked {
            Checked::Accepted(options) => {
                assert_eq!(options.number_of_generated_particles(), 5000);
            }
            Checked::Rejected(report) => panic!("unexpected rejection {report:?}"),
        }
    }

    #[test]
    fn test_check_reports_every_error_with_context() {
        let raw = RawOptions::new()
            .with("meanEnergyLoss", "x")
            .with("numberOfGeneratedParticles", 0)
            .with("bogus", 1);
        let validator = Validator::new(
            ValidatorSettings::default().with_unknown_keys(UnknownKeyPolicy::Reject),
        );
        let context = ErrorContext::new().with_submitted_by("alice".to_string());

        let checked = check(&validator, &raw, &SimulationOptions::default(), context).unwrap();
        let Checked::Rejected(report) = checked else {
            panic!("payload should be rejected");
        };

        assert_eq!(report.context.submitted_by.as_deref(), Some("alice"));
        let fields: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["meanEnergyLoss", "numberOfGeneratedParticles", "bogus"]);
        assert_eq!(report.errors[2].kind, ValidationErrorKind::UnknownField);
    }

    #[test]
    fn test_report_text_lists_errors_in_order() {
        colored::control::set_override(false);
        let raw = RawOptions::new()
            .with("minEnergyLoss", 5.0)
            .with("meanEnergyLoss", 1.0);
        let Checked::Rejected(report) = check(
            &Validator::default(),
            &raw,
            &SimulationOptions::default(),
            ErrorContext::new(),
        )
        .unwrap() else {
            panic!("payload should be rejected");
        };

        let mut out = Vec::new();
        write_report_text(&mut out, &report).unwrap();
        let text = rendered(out);

        assert!(text.starts_with("Simulation options rejected (1 error, report "));
        assert!(text.contains("minEnergyLoss [VALIDATION_1003]"));
        assert!(text.contains("(see meanEnergyLoss)"));
    }

    #[test]
    fn test_options_text_has_every_field() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_options_text(&mut out, &SimulationOptions::default()).unwrap();
        let text = rendered(out);

        assert_eq!(text.lines().count(), 1 + OptionField::ALL.len());
        assert!(text.contains("scatteringType"));
        assert!(text.contains("\"moliere\""));
    }

    #[test]
    fn test_defaults_prints_json() {
        let mut out = Vec::new();
        assert_eq!(defaults(false, &mut out).unwrap(), Outcome::Accepted);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["numberOfGeneratedParticles"], 1000);
        assert_eq!(value["energyStraggling"], "vavilov");
    }

    #[test]
    fn test_read_payload_from_stream() {
        let input = br#"{"nuclearCorectionOn": false, "numberOfGeneratedParticles": 2000}"#;
        let raw = read_payload(&input[..]).unwrap();
        assert_eq!(raw.len(), 2);

        let options = Validator::default()
            .validate(&raw, &SimulationOptions::default())
            .unwrap();
        assert!(!options.nuclear_correction_on());
        assert_eq!(options.number_of_generated_particles(), 2000);
    }

    #[test]
    fn test_read_payload_rejects_non_object() {
        let err = read_payload(&b"[1, 2]"[..]).unwrap_err();
        assert!(matches!(err, TransportError::SerializationError(_)));
    }

    #[test]
    fn test_builtin_defaults_without_file() {
        let defaults = load_defaults(&Validator::default(), None).unwrap();
        assert_eq!(defaults, SimulationOptions::default());
    }
}
