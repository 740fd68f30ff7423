use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use super::Inspection;

impl Inspection {
    fn label_width(&self) -> usize {
        self.record_type
            .map(|t| t.columns().iter().map(|c| c.label.len()).max().unwrap_or(0))
            .unwrap_or(0)
    }

    fn title(&self) -> String {
        match self.record_type {
            Some(record_type) => format!(
                "{} ({}): {} record(s)",
                record_type.root_tag(),
                record_type,
                self.records.len()
            ),
            None => format!(
                "Unrecognised root element: {}",
                self.root_tag.as_deref().unwrap_or("(none)")
            ),
        }
    }

    /// Format the inspection as a colored label/value table (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();
            let width = self.label_width();

            let title = self.title();
            if self.is_recognised() {
                output.push_str(&format!("{}\n", style(&title).bold().cyan()));
            } else {
                output.push_str(&format!("{}\n", style(&title).yellow().bold()));
                return output;
            }

            for (i, record) in self.records.iter().enumerate() {
                output.push_str(&format!("\n{}\n", style(format!("Record {}", i + 1)).bold()));
                for (column, value) in record.iter() {
                    let value = if value.is_empty() {
                        style("-".to_string()).dim()
                    } else {
                        style(value.to_string()).green()
                    };
                    output.push_str(&format!("  {:<width$}  {}\n", column.label, value, width = width));
                }
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        let width = self.label_width();

        for (i, record) in self.records.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "Record {}", i + 1)?;
            for (column, value) in record.iter() {
                writeln!(f, "  {:<width$}  {}", column.label, value, width = width)?;
            }
        }

        Ok(())
    }
}
