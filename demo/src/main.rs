use std::fmt::Display;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use varia::context;
use varia::result::VariantResult;
use varia::sink::{NarrowWriter, Sink};
use varia::{Cast, Variant};

fn literals() -> Vec<Variant> {
    vec![
        Variant::from(false),
        Variant::from(true),
        Variant::from(0),
        Variant::from(1),
        Variant::from(-10),
        Variant::from(10),
        Variant::from(0.0),
        Variant::from(1.0),
        Variant::from(-10.1),
        Variant::from(10.1),
        Variant::from(i64::MAX),
        Variant::from(i64::MIN),
        Variant::from(f64::MAX),
        Variant::from(f64::MIN_POSITIVE),
        Variant::from("false"),
        Variant::from("true"),
        Variant::from("0"),
        Variant::from("1"),
        Variant::from("-10"),
        Variant::from("10"),
        Variant::from("0.0"),
        Variant::from("1.0"),
        Variant::from("-10.2"),
        Variant::from("10.2"),
        Variant::from("100$"),
        Variant::from("-100$"),
        Variant::from("100.5$"),
        Variant::from("-100.5$"),
        Variant::from("9223372036854775807"),
        Variant::from("-9223372036854775806"),
        Variant::from("9223372036854775808"),
        Variant::from("1.79769e+308"),
        Variant::from(" 2.22507e-308"),
        Variant::from("1.79769e+309"),
        Variant::from(" 2.22507e-309"),
        Variant::from("anything"),
        Variant::from("Convert to?"),
        Variant::from("日本語大丈夫?"),
    ]
}

fn shown<T: Cast + Display>(variant: &Variant) -> String {
    match variant.try_cast::<T>() {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

fn report(sink: &mut dyn Sink, values: &[Variant]) -> VariantResult<()> {
    sink.emit_str("# Convert to double (try_cast)\n")?;
    for value in values {
        match value.try_cast::<f64>() {
            Some(result) => sink.emit_str(&format!("Converted: {value:>5} --> {result}\n"))?,
            None => {
                sink.emit_str("Attempted: ")?;
                sink.emit_line(value)?;
            }
        }
    }
    sink.emit_str("\n# Wide rendering\n")?;
    for value in values {
        let wide = value.to_wide_string();
        sink.emit_str(&format!("{wide} [{} units]\n", wide.len()))?;
    }
    sink.emit_str("\n# Convert to every kind\n")?;
    for value in values {
        sink.emit_str(&format!(
            "{value}, {}, {}, {}, {}, {value}\n",
            shown::<bool>(value),
            shown::<i32>(value),
            shown::<i64>(value),
            shown::<f64>(value),
        ))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut sink = NarrowWriter::new(stdout.lock());
    match context!("write the conversion report" => report(&mut sink, &literals())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use std::io::Cursor;

    #[test]
    fn test_report() {
        let values = [
            Variant::from(false),
            Variant::from(10),
            Variant::from(-10.1),
            Variant::from("1.5"),
            Variant::from("100$"),
            Variant::from("true"),
        ];
        let mut cursor = Cursor::new(vec![]);
        let mut sink = NarrowWriter::new(&mut cursor);
        report(&mut sink, &values).unwrap();
        drop(sink);
        let result = String::from_utf8(cursor.into_inner()).unwrap();
        expect![[r#"
            # Convert to double (try_cast)
            Converted:     0 --> 0
            Converted:    10 --> 10
            Converted: -10.100000 --> -10.1
            Converted:   1.5 --> 1.5
            Attempted: 100$
            Attempted: true

            # Wide rendering
            0 [1 units]
            10 [2 units]
            -10.100000 [10 units]
            1.5 [3 units]
            100$ [4 units]
            true [4 units]

            # Convert to every kind
            0, false, 0, 0, 0, 0
            10, true, 10, 10, 10, 10
            -10.100000, true, -10, -10, -10.1, -10.100000
            1.5, true, -, -, 1.5, 1.5
            100$, -, -, -, -, 100$
            true, true, -, -, -, true
        "#]]
        .assert_eq(&result);
    }

    #[test]
    fn test_full_table_renders() {
        let mut cursor = Cursor::new(vec![]);
        let mut sink = NarrowWriter::new(&mut cursor);
        report(&mut sink, &literals()).unwrap();
        drop(sink);
        let result = String::from_utf8(cursor.into_inner()).unwrap();
        assert!(result.contains("Attempted: anything\n"));
        assert!(result.contains("Converted: 9223372036854775808 --> 9223372036854775808\n"));
        assert!(result.contains("Attempted: 1.79769e+309\n"));
        assert!(result.contains("Converted: 1.79769e+308 --> "));
        assert!(result.contains("日本語大丈夫? [7 units]\n"));
    }
}
