//! Rendering of parse results.

use console::style;

use rbcx_core::{ParseResult, StatementReport};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV of the transactions
    Csv,
    /// Plain text summary
    Text,
}

/// Render a result. Failures are always rendered as JSON.
pub fn format_result(result: &ParseResult, format: OutputFormat) -> anyhow::Result<String> {
    match (result, format) {
        (ParseResult::Success(report), OutputFormat::Csv) => format_csv(report),
        (ParseResult::Success(report), OutputFormat::Text) => Ok(format_text(report)),
        _ => Ok(serde_json::to_string_pretty(result)?),
    }
}

fn format_csv(report: &StatementReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["date", "description", "amount", "type"])?;

    for txn in &report.transactions {
        wtr.write_record([
            txn.date.to_string().as_str(),
            txn.description.as_str(),
            txn.amount.to_string().as_str(),
            txn.kind.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &StatementReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Bank: {}\n", report.bank));
    output.push_str(&format!("Statement: {}\n", report.statement_type));
    output.push('\n');

    output.push_str("Transactions:\n");
    for txn in &report.transactions {
        let amount = match txn.kind {
            rbcx_core::TransactionType::Credit => style(format!("+{:>10}", txn.amount)).green(),
            rbcx_core::TransactionType::Debit => style(format!("-{:>10}", txn.amount)).red(),
        };
        output.push_str(&format!("  {}  {}  {}\n", txn.date, amount, txn.description));
    }
    output.push('\n');

    let summary = report.summary();
    output.push_str("Summary:\n");
    output.push_str(&format!(
        "  Credits: {} ({})\n",
        summary.total_credits, summary.credit_count
    ));
    output.push_str(&format!(
        "  Debits:  {} ({})\n",
        summary.total_debits, summary.debit_count
    ));
    output.push_str(&format!("  Net:     {}\n", summary.net));

    output
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use rbcx_core::{StatementType, Transaction, TransactionType};

    fn report() -> StatementReport {
        StatementReport::new(
            StatementType::CreditCard,
            vec![
                Transaction {
                    date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                    description: "COFFEE, TORONTO".to_string(),
                    amount: Decimal::new(450, 2),
                    kind: TransactionType::Debit,
                },
                Transaction {
                    date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
                    description: "PAYMENT".to_string(),
                    amount: Decimal::new(10000, 2),
                    kind: TransactionType::Credit,
                },
            ],
        )
    }

    #[test]
    fn test_csv() {
        let csv = format_result(&ParseResult::Success(report()), OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "date,description,amount,type\n2024-03-02,\"COFFEE, TORONTO\",4.50,debit\n2024-03-06,PAYMENT,100.00,credit\n"
        );
    }

    #[test]
    fn test_text_summary() {
        let text = format_result(&ParseResult::Success(report()), OutputFormat::Text).unwrap();
        assert!(text.contains("Statement: credit_card"));
        assert!(text.contains("Credits: 100.00 (1)"));
        assert!(text.contains("Debits:  4.50 (1)"));
        assert!(text.contains("Net:     95.50"));
    }

    #[test]
    fn test_failure_is_json() {
        let failure = ParseResult::Failure(rbcx_core::ParseFailure {
            kind: rbcx_core::models::statement::FailureKind::FileNotFound,
            error: "PDF file not found: x.pdf".to_string(),
            error_type: None,
        });
        let out = format_result(&failure, OutputFormat::Csv).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], serde_json::Value::Bool(false));
    }
}
