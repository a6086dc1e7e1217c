use crate::Result;
use crate::smells::Diagnosis;
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(diagnoses: &[Diagnosis], use_colors: bool, writer: &mut W) -> Result<()> {
    for (index, diagnosis) in diagnoses.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        let smells = diagnosis.detected().count();
        let status = if smells == 0 {
            "is clean".to_string()
        } else {
            format!("has {smells} smell(s)")
        };

        let colored_status = if !use_colors {
            status
        } else if smells == 0 {
            status.green().bold().to_string()
        } else {
            status.red().bold().to_string()
        };

        writeln!(writer, "{} {colored_status}", diagnosis.artifact)?;

        if diagnosis.incomplete {
            let warning = "  some metrics are absent, only unconditional rules apply";
            if use_colors {
                writeln!(writer, "{}", warning.yellow())?;
            } else {
                writeln!(writer, "{warning}")?;
            }
        }

        for outcome in &diagnosis.outcomes {
            if outcome.detected {
                writeln!(writer, "  🗙 {}: {}", outcome.name, outcome.statement)?;
                for reason in &outcome.reasons {
                    writeln!(writer, "      {reason}")?;
                }
            } else {
                writeln!(writer, "  ✔️ {}", outcome.name)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smells::SmellOutcome;

    fn outcome(name: &str, detected: bool, reasons: &[&str]) -> SmellOutcome {
        SmellOutcome::new(
            name.to_string(),
            None,
            "(LOC > 500 | NOM > 20)".to_string(),
            detected,
            reasons.iter().map(ToString::to_string).collect(),
        )
    }

    fn diagnoses() -> Vec<Diagnosis> {
        vec![
            Diagnosis::new(
                "Parser".to_string(),
                vec![outcome("large_class", true, &["LOC > 500", "NOM > 20"]), outcome("long_method", false, &[])],
                false,
            ),
            Diagnosis::new("Lexer".to_string(), vec![outcome("large_class", false, &[])], true),
        ]
    }

    #[test]
    fn test_console_report_no_colors() {
        let mut output = String::new();
        generate(&diagnoses(), false, &mut output).unwrap();

        insta::assert_snapshot!(output, @r"
        Parser has 1 smell(s)
          🗙 large_class: (LOC > 500 | NOM > 20)
              LOC > 500
              NOM > 20
          ✔️ long_method

        Lexer is clean
          some metrics are absent, only unconditional rules apply
          ✔️ large_class
        ");
    }

    #[test]
    fn test_console_report_with_colors() {
        let mut output = String::new();
        generate(&diagnoses(), true, &mut output).unwrap();

        assert!(output.contains('\u{1b}'), "expected ANSI escapes in {output:?}");
        assert!(output.contains("large_class"));
    }

    #[test]
    fn test_empty_report() {
        let mut output = String::new();
        generate(&[], false, &mut output).unwrap();
        assert!(output.is_empty());
    }
}
