use clap::Parser;
use form_body::{output, reference_fields, FormBody, FormField, REFERENCE_FIXED_FIELDS};
use std::env;

const DEFAULT_NAME: &str = "rahul";
const DEFAULT_LOCATION: &str = "delhi";

/// Form body builder
#[derive(Parser)]
#[command(
    name = "form-body",
    about = "Build and print an application/x-www-form-urlencoded body",
    long_about = None
)]
struct Cli {
    /// Show debug logging
    #[arg(long)]
    verbose: bool,

    /// Value of the `name` field (falls back to FORM_BODY_NAME, then "rahul")
    #[arg(long)]
    name: Option<String>,

    /// Value of the `loc1tion` field (falls back to FORM_BODY_LOCATION, then "delhi")
    #[arg(long)]
    location: Option<String>,

    /// Extra field appended after the reference fields; may be repeated
    #[arg(long = "field", value_name = "KEY=VALUE")]
    fields: Vec<FormField>,

    /// List the fields of an existing encoded body instead of building one
    #[arg(long, value_name = "BODY", conflicts_with_all = ["name", "location", "fields"])]
    decode: Option<String>,

    /// Print JSON instead of the text blocks
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Pick a field value: command line first, then environment, then the default.
fn resolve(arg: Option<String>, env_value: Option<String>, default: &str) -> String {
    arg.or(env_value).unwrap_or_else(|| default.to_string())
}

/// Produce everything the command prints to stdout.
fn render(args: Cli) -> form_body::Result<String> {
    if let Some(encoded) = args.decode {
        let body: FormBody = encoded.parse()?;
        return if args.json {
            output::render_json(&body).map(|json| json + "\n")
        } else {
            Ok(output::render_pairs(body.fields()))
        };
    }

    let name = resolve(args.name, env::var("FORM_BODY_NAME").ok(), DEFAULT_NAME);
    let location = resolve(
        args.location,
        env::var("FORM_BODY_LOCATION").ok(),
        DEFAULT_LOCATION,
    );

    let body = FormBody::builder()
        .fields(reference_fields(&name, &location))
        .fields(args.fields)
        .build();

    if args.json {
        output::render_json(&body).map(|json| json + "\n")
    } else {
        Ok(output::render_text(
            &body,
            &body.fields()[REFERENCE_FIXED_FIELDS..],
        ))
    }
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    match render(args) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};
    use form_body::FormBodyError;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_precedence() {
        let flag = Some("flag".to_string());
        let env_value = Some("env".to_string());

        assert_eq!(resolve(flag.clone(), env_value.clone(), "default"), "flag");
        assert_eq!(resolve(flag, None, "default"), "flag");
        assert_eq!(resolve(None, env_value, "default"), "env");
        assert_eq!(resolve(None, None, "default"), "default");
    }

    #[test]
    fn test_resolve_keeps_empty_flag() {
        assert_eq!(resolve(Some(String::new()), None, DEFAULT_NAME), "");
    }

    #[test]
    fn test_field_without_separator_is_rejected() {
        let err = Cli::try_parse_from(["form-body", "--field", "name"])
            .err()
            .expect("parse should fail");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("expected KEY=VALUE"));
    }

    #[test]
    fn test_decode_conflicts_with_name() {
        let err = Cli::try_parse_from(["form-body", "--decode", "a=1", "--name", "x"])
            .err()
            .expect("parse should fail");
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_render_default_output_lists_supplied_fields() {
        let args = Cli::try_parse_from([
            "form-body",
            "--name",
            "ra hul",
            "--location",
            "delhi",
            "--field",
            "note=a&b",
        ])
        .unwrap();

        let text = render(args).unwrap();
        assert_eq!(
            text,
            "Form body to send:\n\
             data=https%3A%2F%2Ffinal.example.com%2Fpath&host=bad-tracker.com&name=ra+hul&loc1tion=delhi&note=a%26b\n\
             \n\
             Key -> Value\n\
             name -> ra hul\n\
             loc1tion -> delhi\n\
             note -> a&b\n"
        );
    }

    #[test]
    fn test_render_decode() {
        let args = Cli::try_parse_from(["form-body", "--decode", "name=ra+hul&loc1tion=delhi"])
            .unwrap();
        assert_eq!(
            render(args).unwrap(),
            "Key -> Value\nname -> ra hul\nloc1tion -> delhi\n"
        );
    }

    #[test]
    fn test_render_decode_failure_is_an_error() {
        let args = Cli::try_parse_from(["form-body", "--decode", "name=rahul&broken"]).unwrap();
        assert!(matches!(render(args), Err(FormBodyError::Parse(_))));
    }
}
