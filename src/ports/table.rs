// src/ports/table.rs
use crate::domain::Drug;
use std::collections::HashSet;

/// Plain-text renderer for terminal output.
///
/// All methods are pure string builders; callers decide where the text
/// goes. Korean names and dosage forms sit in the last columns so that
/// double-width glyphs cannot shift the numeric columns.
#[derive(Debug)]
pub struct TablePresenter;

impl TablePresenter {
    pub fn new() -> Self {
        Self
    }

    /// Search hits as one line per record, for picking a base drug.
    pub fn search_results(&self, drugs: &[Drug]) -> String {
        let mut out = format!("{:>8}  {:>10}  {:>9}  NAME\n", "ID", "ITEM CODE", "INSURANCE");
        for drug in drugs {
            out.push_str(&format!(
                "{:>8}  {:>10}  {:>9}  {} [{}]\n",
                drug.id,
                code_or_dash(drug.item_seq),
                text_or_dash(&drug.edi_code),
                drug.item_name,
                text_or_dash(&drug.entp_name),
            ));
        }
        out
    }

    /// One record as a labelled detail card.
    pub fn drug_card(&self, drug: &Drug) -> String {
        let mut out = format!("{}\n", drug.item_name);
        out.push_str(&format!("  {:<13}{}\n", "id", drug.id));
        out.push_str(&format!("  {:<13}{}\n", "item code", code_or_dash(drug.item_seq)));
        out.push_str(&format!("  {:<13}{}\n", "insurance", text_or_dash(&drug.edi_code)));
        out.push_str(&format!("  {:<13}{}\n", "manufacturer", text_or_dash(&drug.entp_name)));
        out.push_str(&format!("  {:<13}{}\n", "dosage form", text_or_dash(&drug.form_code_name)));
        out.push_str(&format!("  {:<13}{}\n", "dimensions", dimensions(drug)));
        out
    }

    /// Compatible records, with a `*` in front of every drug already on the
    /// saved list.
    pub fn match_results(&self, drugs: &[Drug], saved_ids: &HashSet<i64>) -> String {
        let mut out = format!("   {:>8}  {:<20}  NAME\n", "ID", "DIMENSIONS");
        let mut any_saved = false;
        for drug in drugs {
            let marker = if saved_ids.contains(&drug.id) {
                any_saved = true;
                '*'
            } else {
                ' '
            };
            out.push_str(&format!(
                " {} {:>8}  {:<20}  {} [{}]\n",
                marker,
                drug.id,
                dimensions(drug),
                drug.item_name,
                text_or_dash(&drug.form_code_name),
            ));
        }
        if any_saved {
            out.push_str("\n * already in your list\n");
        }
        out
    }

    /// The saved list as a numbered table.
    pub fn saved_table(&self, drugs: &[Drug]) -> String {
        let mut out = format!(
            "{:>4}  {:>8}  {:>10}  {:>9}  NAME\n",
            "NO", "ID", "ITEM CODE", "INSURANCE"
        );
        for (i, drug) in drugs.iter().enumerate() {
            out.push_str(&format!(
                "{:>4}  {:>8}  {:>10}  {:>9}  {}\n",
                i + 1,
                drug.id,
                code_or_dash(drug.item_seq),
                text_or_dash(&drug.edi_code),
                drug.item_name,
            ));
        }
        out
    }
}

/// `l x s x t mm`, or `-` when no dimensions are on record.
fn dimensions(drug: &Drug) -> String {
    if drug.leng_long == 0.0 && drug.leng_short == 0.0 && drug.thick == 0.0 {
        return "-".to_string();
    }
    format!(
        "{} x {} x {} mm",
        fmt_mm(drug.leng_long),
        fmt_mm(drug.leng_short),
        fmt_mm(drug.thick)
    )
}

/// Millimeter value with up to two decimals and no trailing zeros.
fn fmt_mm(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn code_or_dash(code: i64) -> String {
    if code == 0 {
        "-".to_string()
    } else {
        code.to_string()
    }
}

fn text_or_dash(text: &str) -> &str {
    if text.trim().is_empty() {
        "-"
    } else {
        text
    }
}
