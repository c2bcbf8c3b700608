//! Account CLI commands
//!
//! `run` replays a list of operations against a fresh account; `history`
//! reads back the audit log.

use clap::Args;

use super::operation::AccountOp;
use crate::audit::AuditLogger;
use crate::config::{AccountPaths, Settings};
use crate::display::{format_account_details, format_history};
use crate::error::BankResult;
use crate::models::{format_amount, Account};
use crate::services::AccountService;

/// Arguments for `account run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Operations to apply in order: deposit:<amount>, withdraw:<amount>, balance
    #[arg(required = true, value_name = "OP")]
    pub operations: Vec<String>,

    /// Report rejected operations and continue instead of stopping
    #[arg(short, long)]
    pub keep_going: bool,

    /// Print account details after the run
    #[arg(short, long)]
    pub details: bool,
}

/// Totals for a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub applied: usize,
    pub rejected: usize,
    pub final_balance: f64,
}

/// Apply one operation and describe the result
///
/// Rejections come back as `Err` so the caller decides whether to stop.
pub fn execute(
    service: &mut AccountService<'_>,
    op: AccountOp,
    symbol: &str,
) -> BankResult<String> {
    match op {
        AccountOp::Deposit(amount) => {
            service.deposit(amount)?;
            Ok(format!(
                "{} -> balance {}",
                op,
                format_amount(service.balance(), symbol)
            ))
        }
        AccountOp::Withdraw(amount) => {
            let done = service.withdraw(amount)?;
            Ok(format!(
                "{} -> {}, balance {}",
                op,
                done,
                format_amount(service.balance(), symbol)
            ))
        }
        AccountOp::Balance => Ok(format!(
            "balance {}",
            format_amount(service.balance(), symbol)
        )),
    }
}

/// Handle `account run`
pub fn handle_run_command(
    paths: &AccountPaths,
    settings: &Settings,
    args: RunArgs,
) -> BankResult<RunReport> {
    // Parse everything up front so a typo doesn't leave a half-applied run
    let ops = args
        .operations
        .iter()
        .map(|token| token.parse::<AccountOp>())
        .collect::<BankResult<Vec<_>>>()?;

    let logger = if settings.audit_enabled {
        paths.ensure_directories()?;
        Some(AuditLogger::new(paths.audit_log()))
    } else {
        None
    };

    let mut account = Account::new();
    let mut service = match &logger {
        Some(logger) => AccountService::with_audit(&mut account, logger),
        None => AccountService::new(&mut account),
    };
    service.open()?;

    let symbol = settings.currency_symbol.as_str();
    let mut report = RunReport {
        applied: 0,
        rejected: 0,
        final_balance: 0.0,
    };

    for op in ops {
        match execute(&mut service, op, symbol) {
            Ok(line) => {
                report.applied += 1;
                println!("{}", line);
            }
            Err(err) if args.keep_going && err.is_invalid_argument() => {
                report.rejected += 1;
                println!("{} -> rejected: {}", op, err);
            }
            Err(err) => return Err(err),
        }
    }

    report.final_balance = service.balance();
    println!("Final balance: {}", format_amount(report.final_balance, symbol));

    if args.details {
        println!();
        print!("{}", format_account_details(service.account(), symbol));
    }

    Ok(report)
}

/// Handle `account history`
pub fn handle_history_command(
    paths: &AccountPaths,
    settings: &Settings,
    count: Option<usize>,
) -> BankResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(count.unwrap_or(settings.audit_recent_count))?;
    print!("{}", format_history(&entries));
    Ok(())
}
