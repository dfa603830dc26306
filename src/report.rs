//! Text rendering of projection results.

use crate::types::ProjectionResult;
use anyhow::{Context, Result};
use std::io::Write;

const CHART_HEIGHT: usize = 12;
const CHART_COL_WIDTH: usize = 4;

/// Format a number with thousands separators and a fixed number of decimals.
pub fn group_digits(val: f64, decimals: usize) -> String {
    let fixed = format!("{val:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i_digit, digit) in int_part.chars().enumerate() {
        if i_digit > 0 && (int_part.len() - i_digit) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Write the yearly demand table: one row per year, one column per crop plus the total.
pub fn write_table<W: Write>(res: &ProjectionResult, out: &mut W) -> Result<()> {
    let mut header = vec!["Año".to_string()];
    if let Some(first) = res.records.first() {
        for (name, _) in &first.demand_by_crop {
            header.push(format!("Demanda {name} (L)"));
        }
    }
    header.push("Demanda Total (L)".to_string());

    let rows: Vec<Vec<String>> = res
        .records
        .iter()
        .map(|rec| {
            let mut row = vec![rec.year.to_string()];
            row.extend(rec.demand_by_crop.iter().map(|&(_, d)| group_digits(d, 0)));
            row.push(group_digits(rec.total_demand, 0));
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i_col| {
            rows.iter()
                .map(|row| row[i_col].chars().count())
                .chain([header[i_col].chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(out, &header, &widths).context("failed to write table header")?;
    let rule: Vec<_> = widths.iter().map(|&w| "-".repeat(w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &rows {
        write_row(out, row, &widths).context("failed to write table row")?;
    }

    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> Result<()> {
    let padded: Vec<_> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect();
    writeln!(out, "{}", padded.join(" | "))?;
    Ok(())
}

/// Write the peak demand and pond size summary lines.
pub fn write_summary<W: Write>(res: &ProjectionResult, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Demanda máxima de agua: {} litros",
        group_digits(res.peak_demand, 0)
    )?;
    writeln!(
        out,
        "Área requerida de la olla: {} m²",
        group_digits(res.pond_area_m2, 2)
    )?;
    writeln!(out, "Esto equivale a {:.4} hectáreas", res.pond_area_ha)?;
    Ok(())
}

/// Write a line-and-fill chart of the total demand against the year.
///
/// Each year is a column; `o` marks the total demand and `#` fills the area below it.
pub fn write_chart<W: Write>(res: &ProjectionResult, out: &mut W) -> Result<()> {
    let levels: Vec<usize> = res
        .records
        .iter()
        .map(|rec| chart_level(rec.total_demand, res.peak_demand))
        .collect();

    let col_width = CHART_COL_WIDTH;
    let peak_label = group_digits(res.peak_demand, 0);
    let label_width = peak_label.chars().count().max(1);

    writeln!(out, "Demanda Hídrica Anual (L)")?;
    for row in (1..=CHART_HEIGHT).rev() {
        let label = if row == CHART_HEIGHT { peak_label.as_str() } else { "" };
        let mut line = format!("{label:>label_width$} |");
        for &level in &levels {
            let cell = if level == row {
                'o'
            } else if level > row {
                '#'
            } else {
                ' '
            };
            line.push_str(&format!("{cell:^col_width$}"));
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    let axis = "-".repeat(col_width * levels.len());
    writeln!(out, "{:>label_width$} +{axis}", "0")?;
    let years: String = res
        .records
        .iter()
        .map(|rec| format!("{:^col_width$}", rec.year))
        .collect();
    writeln!(out, "{:>label_width$}  {}", "", years.trim_end())?;
    writeln!(out, "{:>label_width$}  Año", "")?;

    Ok(())
}

fn chart_level(val: f64, peak: f64) -> usize {
    if peak <= 0.0 {
        return 0;
    }
    (val / peak * CHART_HEIGHT as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::YearlyRecord;

    fn result(totals: &[f64]) -> ProjectionResult {
        let records = totals
            .iter()
            .enumerate()
            .map(|(i_year, &total)| YearlyRecord {
                year: i_year + 1,
                demand_by_crop: vec![("Cacao".to_string(), total)],
                total_demand: total,
            })
            .collect();
        let peak_demand = totals.iter().copied().fold(0.0, f64::max);
        ProjectionResult {
            records,
            peak_demand,
            pond_volume_m3: peak_demand / 1000.0,
            pond_area_m2: peak_demand / 5000.0,
            pond_area_ha: peak_demand / 5000.0 / 10_000.0,
        }
    }

    fn render<F>(res: &ProjectionResult, write: F) -> String
    where
        F: Fn(&ProjectionResult, &mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        write(res, &mut buf).expect("failed to render");
        String::from_utf8(buf).expect("output is not valid UTF-8")
    }

    #[test]
    fn groups_digits() {
        assert_eq!(group_digits(0.0, 0), "0");
        assert_eq!(group_digits(999.0, 0), "999");
        assert_eq!(group_digits(1000.0, 0), "1,000");
        assert_eq!(group_digits(18_432_000.0, 0), "18,432,000");
        assert_eq!(group_digits(3686.4, 2), "3,686.40");
        assert_eq!(group_digits(123_456.789, 2), "123,456.79");
        assert_eq!(group_digits(-4_608_000.0, 0), "-4,608,000");
    }

    #[test]
    fn table_has_header_and_one_row_per_year() {
        let res = result(&[4_608_000.0, 6_144_000.0, 9_216_000.0, 12_288_000.0, 18_432_000.0]);
        let table = render(&res, write_table);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 2 + res.records.len());
        assert!(lines[0].contains("Demanda Cacao (L)"));
        assert!(lines[0].ends_with("Demanda Total (L)"));
        assert!(lines[2].trim_start().starts_with("1 |"));
        assert!(lines[6].ends_with("18,432,000"));
    }

    #[test]
    fn summary_uses_fixed_decimals() {
        let res = result(&[18_432_000.0; 5]);
        let summary = render(&res, write_summary);

        assert!(summary.contains("18,432,000 litros"));
        assert!(summary.contains("3,686.40 m²"));
        assert!(summary.contains("0.3686 hectáreas"));
    }

    #[test]
    fn chart_marks_peak_on_top_row() {
        let res = result(&[1.0, 2.0, 4.0, 8.0, 8.0, 8.0]);
        let chart = render(&res, write_chart);
        let lines: Vec<_> = chart.lines().collect();

        assert_eq!(lines.len(), 1 + CHART_HEIGHT + 3);
        assert!(lines[1].starts_with("8 |"));
        assert_eq!(lines[1].matches('o').count(), 3);
        assert!(lines[CHART_HEIGHT + 2].contains('6'));
    }

    #[test]
    fn chart_of_zero_demand_is_empty() {
        let res = result(&[0.0; 5]);
        let chart = render(&res, write_chart);
        let plot: String = chart.lines().skip(1).take(CHART_HEIGHT).collect();

        assert!(!plot.contains('o'));
        assert!(!plot.contains('#'));
    }
}
