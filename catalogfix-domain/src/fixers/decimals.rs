use crate::columns::{Field, HeaderAliases};
use crate::fixers::{Fixed, Fixer, FixerMeta};
use catalogfix_types::value::format_float;
use catalogfix_types::{ChangeKind, ChangeRecord, Table, Value};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, trace};

const MONEY_DP: u32 = 2;

/// Rounds monetary columns to two decimal places.
#[derive(Debug, Clone, Default)]
pub struct DecimalFixer {
    aliases: HeaderAliases,
}

impl DecimalFixer {
    pub const META: FixerMeta = FixerMeta {
        key: "decimals",
        section: "Decimal Fixes",
        description: "Rounds prices to two decimal places",
    };

    pub fn new(aliases: &HeaderAliases) -> Self {
        Self {
            aliases: aliases.clone(),
        }
    }
}

/// Digits after the decimal point in the shortest round-trip form of `x`.
fn fraction_digits(x: f64) -> usize {
    let repr = x.to_string();
    repr.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// `Some(rounded)` when `x` carries more than two decimal places.
///
/// Rounds half-to-even on the exact binary value, so `0.125` becomes `0.12`
/// while `12.345` (stored slightly above the midpoint) becomes `12.35`.
/// Small negatives round to `-0.0`.
fn round_money(x: f64) -> Option<f64> {
    if !x.is_finite() || fraction_digits(x) <= MONEY_DP as usize {
        return None;
    }
    let exact = Decimal::from_f64_retain(x)?;
    let rounded = exact.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointNearestEven);
    let value: f64 = rounded.normalize().to_string().parse().ok()?;
    Some(value.copysign(x))
}

impl Fixer for DecimalFixer {
    fn meta(&self) -> FixerMeta {
        Self::META
    }

    fn fix(&self, table: &Table) -> Fixed {
        let mut out = table.clone();
        let mut changes = Vec::new();

        for field in Field::MONEY {
            let Some(col) = self.aliases.resolve(table, field) else {
                continue;
            };
            let column = &table.columns()[col];

            // Read from `out` so a column claimed by two fields is only rounded once.
            let cells: Vec<(usize, f64)> = out
                .column_values(col)
                .filter_map(|(row, v)| match v {
                    Value::Float(x) => Some((row, *x)),
                    _ => {
                        trace!(row, column = %column, "not a float; skipping");
                        None
                    }
                })
                .collect();

            for (row, num) in cells {
                let Some(rounded) = round_money(num) else {
                    continue;
                };
                out.set(row, col, Value::Float(rounded));
                changes.push(ChangeRecord::for_row(
                    row,
                    ChangeKind::Rounded,
                    column,
                    format!(
                        "{column} of {} rounded to {}",
                        format_float(num),
                        format_float(rounded)
                    ),
                ));
            }
        }

        debug!(changes = changes.len(), "decimal fixes");
        Fixed {
            table: out,
            changes,
        }
    }
}
