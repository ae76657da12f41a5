//! Basket totals: turns a precomputed [`BasketState`] into display rows.
//!
//! The basket subsystem that produces the state is external. Nothing here
//! recomputes or validates its numbers; a malformed state renders as-is.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Snapshot of basket totals as produced by the cart backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketState {
    pub total_price: Decimal,
    /// Absent or zero means no discount rows are rendered.
    #[serde(default)]
    pub discount: Option<Decimal>,
    pub total_price_minus_discount: Decimal,
    pub total_to_pay: Decimal,
    pub total_vat_amount: Decimal,
    #[serde(default)]
    pub shipping: Option<Shipping>,
    #[serde(default)]
    pub free_shipping: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipping {
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TotalsRowKind {
    TotalPrice,
    Discount,
    TotalAfterDiscount,
    Shipping,
    TotalVat,
    ToPay,
}

impl TotalsRowKind {
    /// CSS-style modifier name of the row.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            TotalsRowKind::TotalPrice => "total-price",
            TotalsRowKind::Discount => "discount",
            TotalsRowKind::TotalAfterDiscount => "total-after-discount",
            TotalsRowKind::Shipping => "shipping",
            TotalsRowKind::TotalVat => "total-vat",
            TotalsRowKind::ToPay => "to-pay",
        }
    }

    /// Translation key of the row label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            TotalsRowKind::TotalPrice => "basket:totalPrice",
            TotalsRowKind::Discount => "basket:discount",
            TotalsRowKind::TotalAfterDiscount => "basket:totalAfterDiscount",
            TotalsRowKind::Shipping => "basket:shipping",
            TotalsRowKind::TotalVat => "basket:totalVatAmount",
            TotalsRowKind::ToPay => "basket:amountToPay",
        }
    }
}

/// One rendered money value inside a totals row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountCell {
    pub amount: Decimal,
    pub struck_through: bool,
    /// When set, the value is always shown with exactly this many fraction digits.
    pub fixed_fraction_digits: Option<u32>,
}

impl AmountCell {
    fn plain(amount: Decimal) -> Self {
        Self {
            amount,
            struck_through: false,
            fixed_fraction_digits: None,
        }
    }

    fn struck(amount: Decimal) -> Self {
        Self {
            amount,
            struck_through: true,
            fixed_fraction_digits: None,
        }
    }

    fn fixed(amount: Decimal, digits: u32) -> Self {
        Self {
            amount,
            struck_through: false,
            fixed_fraction_digits: Some(digits),
        }
    }

    /// Display text of the amount, keeping the scale it was given with unless
    /// a fixed number of fraction digits is requested.
    #[must_use]
    pub fn text(&self) -> String {
        match self.fixed_fraction_digits {
            Some(digits) => {
                let mut value = self
                    .amount
                    .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
                value.rescale(digits);
                value.to_string()
            }
            None => self.amount.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsRow {
    pub kind: TotalsRowKind,
    pub cells: Vec<AmountCell>,
}

impl TotalsRow {
    fn single(kind: TotalsRowKind, cell: AmountCell) -> Self {
        Self {
            kind,
            cells: vec![cell],
        }
    }
}

impl BasketState {
    /// `true` when a discount is present and non-zero.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount.is_some_and(|d| !d.is_zero())
    }

    /// Renders the fixed, ordered sequence of totals rows.
    ///
    /// Order: total price, discount and total-after-discount (only with a
    /// discount), shipping, VAT, amount to pay.
    #[must_use]
    pub fn total_rows(&self) -> Vec<TotalsRow> {
        let mut rows = Vec::with_capacity(6);

        rows.push(TotalsRow::single(
            TotalsRowKind::TotalPrice,
            AmountCell::plain(self.total_price),
        ));

        if let Some(discount) = self.discount.filter(|_| self.has_discount()) {
            rows.push(TotalsRow::single(
                TotalsRowKind::Discount,
                AmountCell::plain(discount),
            ));
            rows.push(TotalsRow::single(
                TotalsRowKind::TotalAfterDiscount,
                AmountCell::plain(self.total_price_minus_discount),
            ));
        }

        rows.push(self.shipping_row());

        rows.push(TotalsRow::single(
            TotalsRowKind::TotalVat,
            AmountCell::fixed(self.total_vat_amount, 2),
        ));

        rows.push(TotalsRow::single(
            TotalsRowKind::ToPay,
            AmountCell::plain(self.total_to_pay),
        ));

        rows
    }

    fn shipping_row(&self) -> TotalsRow {
        let shipping_price = self.shipping.as_ref().map(|s| s.unit_price);

        if self.free_shipping {
            let mut cells = Vec::with_capacity(2);
            if let Some(original) = shipping_price.filter(|p| *p > Decimal::ZERO) {
                cells.push(AmountCell::struck(original));
            }
            cells.push(AmountCell::plain(Decimal::ZERO));
            return TotalsRow {
                kind: TotalsRowKind::Shipping,
                cells,
            };
        }

        TotalsRow::single(
            TotalsRowKind::Shipping,
            AmountCell::plain(shipping_price.unwrap_or(Decimal::ZERO)),
        )
    }
}
