//! # Domain Types
//!
//! The quote data model and the name-based addressing used by the view.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           QuoteState                                    │
//! │                                                                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌───────────────┐ ┌─────────────┐ │
//! │  │   Branding    │ │ SenderAddress │ │ SenderContact │ │SenderPerson │ │
//! │  │  name, logo   │ │ street, zip.. │ │ tel, email..  │ │ name, tel   │ │
//! │  └───────────────┘ └───────────────┘ └───────────────┘ └─────────────┘ │
//! │  ┌───────────────┐ ┌───────────────┐ ┌───────────────┐                 │
//! │  │  TaxSettings  │ │CustomerDetails│ │ QuoteDetails  │                 │
//! │  │ label, rate % │ │ name, id..    │ │ number, dates │                 │
//! │  └───────┬───────┘ └───────────────┘ └───────────────┘                 │
//! │          │ tax_rate                                                     │
//! │          ▼                                                              │
//! │  ┌───────────────┐   quantity × rate   ┌───────────────┐               │
//! │  │ Vec<LineItem> │ ──────────────────► │    Totals     │ (overridable) │
//! │  └───────────────┘                     └───────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name-Based Addressing
//! The view edits one field at a time and names it by section and field,
//! e.g. `("customer", "phone")`. [`Section`] parses the section name and
//! [`FieldAccess`] maps field names onto struct fields for each sub-object.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Amount;

// =============================================================================
// Field Values
// =============================================================================

/// A single edited value as sent by the view.
///
/// Untagged on the wire: the view sends `"text"` or `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    /// Free text, including decimal-as-text fields like the tax rate.
    Text(String),
    /// On/off toggle.
    Flag(bool),
}

impl FieldValue {
    /// Kind name used in error messages.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// The declared kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => f.write_str("text"),
            FieldKind::Flag => f.write_str("flag"),
        }
    }
}

// =============================================================================
// Field Access
// =============================================================================

/// Name-based read/write access to the fields of one sub-object.
///
/// ## Contract
/// - `FIELDS` lists every addressable field name.
/// - `set` only fails on an unknown name or a value of the wrong kind;
///   any text (empty, placeholder, non-numeric) is accepted for text fields.
pub trait FieldAccess {
    /// Section this sub-object lives under.
    const SECTION: Section;

    /// Addressable field names, in form order.
    const FIELDS: &'static [&'static str];

    /// Reads a field by name.
    fn get(&self, field: &str) -> Option<FieldValue>;

    /// Replaces a field by name.
    fn set(&mut self, field: &str, value: FieldValue) -> ValidationResult<()>;
}

fn unknown_field(section: Section, field: &str) -> ValidationError {
    ValidationError::UnknownField {
        section: section.to_string(),
        field: field.to_string(),
    }
}

fn expect_text(section: Section, field: &str, value: FieldValue) -> ValidationResult<String> {
    match value {
        FieldValue::Text(text) => Ok(text),
        FieldValue::Flag(_) => Err(ValidationError::TypeMismatch {
            section: section.to_string(),
            field: field.to_string(),
            expected: FieldKind::Text.to_string(),
        }),
    }
}

fn expect_flag(section: Section, field: &str, value: FieldValue) -> ValidationResult<bool> {
    match value {
        FieldValue::Flag(flag) => Ok(flag),
        FieldValue::Text(_) => Err(ValidationError::TypeMismatch {
            section: section.to_string(),
            field: field.to_string(),
            expected: FieldKind::Flag.to_string(),
        }),
    }
}

/// Implements [`FieldAccess`] for a struct whose addressable fields are all
/// `String`s named exactly like their keys.
macro_rules! text_fields {
    ($ty:ty, $section:expr, [$($field:ident),+ $(,)?]) => {
        impl FieldAccess for $ty {
            const SECTION: Section = $section;
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn get(&self, field: &str) -> Option<FieldValue> {
                match field {
                    $(stringify!($field) => Some(FieldValue::Text(self.$field.clone())),)+
                    _ => None,
                }
            }

            fn set(&mut self, field: &str, value: FieldValue) -> ValidationResult<()> {
                match field {
                    $(stringify!($field) => {
                        self.$field = expect_text(Self::SECTION, field, value)?;
                    })+
                    _ => return Err(unknown_field(Self::SECTION, field)),
                }
                Ok(())
            }
        }
    };
}

// =============================================================================
// Sections
// =============================================================================

/// The named sub-objects of [`QuoteState`] that accept field edits.
///
/// Line items are not a section: they are edited through the collection
/// operations in [`crate::store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Branding,
    Address,
    Contact,
    Person,
    Tax,
    Customer,
    Quote,
    Totals,
}

impl Section {
    /// Every section, in form order.
    pub const ALL: [Section; 8] = [
        Section::Branding,
        Section::Address,
        Section::Contact,
        Section::Person,
        Section::Tax,
        Section::Customer,
        Section::Quote,
        Section::Totals,
    ];

    /// Wire name of the section.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Section::Branding => "branding",
            Section::Address => "address",
            Section::Contact => "contact",
            Section::Person => "person",
            Section::Tax => "tax",
            Section::Customer => "customer",
            Section::Quote => "quote",
            Section::Totals => "totals",
        }
    }

    /// Field names the section accepts.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Section::Branding => Branding::FIELDS,
            Section::Address => SenderAddress::FIELDS,
            Section::Contact => SenderContact::FIELDS,
            Section::Person => SenderPerson::FIELDS,
            Section::Tax => TaxSettings::FIELDS,
            Section::Customer => CustomerDetails::FIELDS,
            Section::Quote => QuoteDetails::FIELDS,
            Section::Totals => Totals::FIELDS,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSection {
                name: s.to_string(),
                allowed: Section::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Company & Sender
// =============================================================================

/// Company branding shown in the document header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Branding {
    pub company_name: String,
    /// Whether the company name is printed next to the logo.
    pub company_name_enabled: bool,
    /// Opaque image data (data URL or plain URL), stored verbatim.
    pub logo: String,
}

impl FieldAccess for Branding {
    const SECTION: Section = Section::Branding;
    const FIELDS: &'static [&'static str] = &["company_name", "company_name_enabled", "logo"];

    fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "company_name" => Some(FieldValue::Text(self.company_name.clone())),
            "company_name_enabled" => Some(FieldValue::Flag(self.company_name_enabled)),
            "logo" => Some(FieldValue::Text(self.logo.clone())),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: FieldValue) -> ValidationResult<()> {
        match field {
            "company_name" => self.company_name = expect_text(Self::SECTION, field, value)?,
            "company_name_enabled" => {
                self.company_name_enabled = expect_flag(Self::SECTION, field, value)?
            }
            "logo" => self.logo = expect_text(Self::SECTION, field, value)?,
            _ => return Err(unknown_field(Self::SECTION, field)),
        }
        Ok(())
    }
}

/// Sender postal address (document footer).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SenderAddress {
    pub building_number: String,
    pub street: String,
    pub town_city: String,
    pub county: String,
    pub state: String,
    pub zip_code: String,
}

text_fields!(
    SenderAddress,
    Section::Address,
    [building_number, street, town_city, county, state, zip_code]
);

/// Sender contact channels (document footer).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SenderContact {
    pub tel: String,
    pub fax: String,
    pub email: String,
    pub website: String,
}

text_fields!(SenderContact, Section::Contact, [tel, fax, email, website]);

/// The person customers should contact about the quote.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SenderPerson {
    pub name: String,
    pub tel: String,
}

text_fields!(SenderPerson, Section::Person, [name, tel]);

// =============================================================================
// Tax Settings
// =============================================================================

/// Tax label, rate and currency symbol.
///
/// `tax_rate` is decimal-as-text (`"20.00"` means 20%). It is parsed with
/// [`crate::parse::parse_numeric_field_or_zero`] when totals are computed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxSettings {
    pub tax_label: String,
    pub tax_rate: String,
    pub currency_symbol: String,
}

text_fields!(TaxSettings, Section::Tax, [tax_label, tax_rate, currency_symbol]);

// =============================================================================
// Customer & Quote Metadata
// =============================================================================

/// Who the quote is for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerDetails {
    pub name: String,
    pub company_name: String,
    pub address: String,
    pub city_state_zip: String,
    pub phone: String,
    pub customer_id: String,
}

text_fields!(
    CustomerDetails,
    Section::Customer,
    [name, company_name, address, city_state_zip, phone, customer_id]
);

/// Quote identifiers, dates and free text.
///
/// Dates are display text; the editor never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteDetails {
    pub quote_number: String,
    pub date: String,
    pub valid_until: String,
    pub description: String,
    pub terms: String,
}

text_fields!(
    QuoteDetails,
    Section::Quote,
    [quote_number, date, valid_until, description, terms]
);

// =============================================================================
// Line Items
// =============================================================================

/// One billable row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    /// Free-text category ("Service", "Junior", ...).
    pub category: String,
    /// Unit rate.
    pub rate: f64,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(
        description: impl Into<String>,
        quantity: f64,
        category: impl Into<String>,
        rate: f64,
    ) -> Self {
        LineItem {
            description: description.into(),
            quantity,
            category: category.into(),
            rate,
        }
    }

    /// The row appended by "Add Line Item".
    pub fn placeholder() -> Self {
        LineItem::new(
            crate::NEW_ITEM_DESCRIPTION,
            1.0,
            crate::NEW_ITEM_CATEGORY,
            0.0,
        )
    }

    /// Line total (quantity × rate). Always derived, never stored; an
    /// overflowing product counts as 0.
    #[inline]
    pub fn line_total(&self) -> Amount {
        (Amount::new(self.rate) * self.quantity).finite_or_zero()
    }
}

/// The editable columns of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LineItemField {
    Description,
    Quantity,
    Category,
    Rate,
}

impl LineItemField {
    pub const ALL: [LineItemField; 4] = [
        LineItemField::Description,
        LineItemField::Quantity,
        LineItemField::Category,
        LineItemField::Rate,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            LineItemField::Description => "description",
            LineItemField::Quantity => "quantity",
            LineItemField::Category => "category",
            LineItemField::Rate => "rate",
        }
    }
}

impl fmt::Display for LineItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineItemField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineItemField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownLineItemField(s.to_string()))
    }
}

// =============================================================================
// Totals
// =============================================================================

/// The totals block as displayed.
///
/// Every field is display text. The calculator fills in everything but
/// `discount`; the user may overwrite any of them until the next
/// recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Totals {
    pub subtotal: String,
    /// Manual-only; never written by the calculator.
    pub discount: String,
    pub tax_rate: String,
    pub tax_amount: String,
    pub total: String,
}

text_fields!(
    Totals,
    Section::Totals,
    [subtotal, discount, tax_rate, tax_amount, total]
);

// =============================================================================
// Quote State
// =============================================================================

/// The whole editing session's data.
///
/// `Default` is the all-empty state; [`QuoteState::sample`] is the
/// illustrative one a fresh session starts with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteState {
    pub branding: Branding,
    pub address: SenderAddress,
    pub contact: SenderContact,
    pub person: SenderPerson,
    pub tax: TaxSettings,
    pub customer: CustomerDetails,
    pub quote: QuoteDetails,
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

impl QuoteState {
    /// Illustrative starting data, dated `date`.
    ///
    /// Totals are already consistent with the items and tax rate.
    pub fn sample(date: NaiveDate) -> Self {
        QuoteState {
            branding: Branding {
                company_name: "afriwork".to_string(),
                company_name_enabled: true,
                logo: String::new(),
            },
            address: SenderAddress {
                building_number: "111".to_string(),
                street: "Street".to_string(),
                town_city: "Town/City".to_string(),
                county: "County".to_string(),
                state: "ST".to_string(),
                zip_code: "00000".to_string(),
            },
            contact: SenderContact {
                tel: "0-000-000-0000".to_string(),
                fax: "0-000-000-0000".to_string(),
                email: "info@yourcompanysite.com".to_string(),
                website: "www.yourcompanysite.com".to_string(),
            },
            person: SenderPerson {
                name: "John Doe".to_string(),
                tel: "0-000-000-0000".to_string(),
            },
            tax: TaxSettings {
                tax_label: "VAT".to_string(),
                tax_rate: crate::DEFAULT_TAX_RATE.to_string(),
                currency_symbol: "$".to_string(),
            },
            customer: CustomerDetails {
                name: "[Name]".to_string(),
                company_name: "[Company Name]".to_string(),
                address: "[Street Address]".to_string(),
                city_state_zip: "[City, ST ZIP Code]".to_string(),
                phone: "[Phone]".to_string(),
                customer_id: "[ABC12345]".to_string(),
            },
            quote: QuoteDetails {
                quote_number: "[100]".to_string(),
                date: date.format("%B %-d, %Y").to_string(),
                valid_until: "[Date]".to_string(),
                description: String::new(),
                terms: String::new(),
            },
            items: vec![
                LineItem::new("Recruitment for Accountant position", 1.0, "Intermediate", 17850.0),
                LineItem::new("Recruitment for Sales position", 4.0, "Junior", 11350.0),
                LineItem::new("Recruitment for Cashier position", 1.0, "Junior", 11350.0),
            ],
            totals: Totals {
                subtotal: "74,600.00".to_string(),
                discount: crate::DISCOUNT_PLACEHOLDER.to_string(),
                tax_rate: crate::DEFAULT_TAX_RATE.to_string(),
                tax_amount: "14,920.00".to_string(),
                total: "89,520.00".to_string(),
            },
        }
    }

    /// Reads a field by section and name.
    pub fn field(&self, section: Section, field: &str) -> Option<FieldValue> {
        match section {
            Section::Branding => self.branding.get(field),
            Section::Address => self.address.get(field),
            Section::Contact => self.contact.get(field),
            Section::Person => self.person.get(field),
            Section::Tax => self.tax.get(field),
            Section::Customer => self.customer.get(field),
            Section::Quote => self.quote.get(field),
            Section::Totals => self.totals.get(field),
        }
    }

    /// Replaces a field in place. Does not recalculate; see
    /// [`crate::store::update_field`] for the full operation.
    pub(crate) fn set_field(
        &mut self,
        section: Section,
        field: &str,
        value: FieldValue,
    ) -> ValidationResult<()> {
        match section {
            Section::Branding => self.branding.set(field, value),
            Section::Address => self.address.set(field, value),
            Section::Contact => self.contact.set(field, value),
            Section::Person => self.person.set(field, value),
            Section::Tax => self.tax.set(field, value),
            Section::Customer => self.customer.set(field, value),
            Section::Quote => self.quote.set(field, value),
            Section::Totals => self.totals.set(field, value),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuoteState {
        QuoteState::sample(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    #[test]
    fn test_section_parse_roundtrip() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_unknown_section() {
        let err = "items".parse::<Section>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSection { ref name, .. } if name == "items"));
    }

    #[test]
    fn test_every_declared_field_is_readable() {
        let state = sample();
        for section in Section::ALL {
            for field in section.fields() {
                assert!(
                    state.field(section, field).is_some(),
                    "{}.{} not readable",
                    section,
                    field
                );
            }
        }
    }

    #[test]
    fn test_text_field_set_and_get() {
        let mut customer = CustomerDetails::default();
        customer.set("phone", "555-0100".into()).unwrap();
        assert_eq!(customer.phone, "555-0100");
        assert_eq!(customer.get("phone"), Some(FieldValue::Text("555-0100".into())));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut contact = SenderContact::default();
        let err = contact.set("pager", "123".into()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                section: "contact".into(),
                field: "pager".into()
            }
        );
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let mut branding = Branding::default();
        assert!(branding.set("company_name_enabled", "yes".into()).is_err());
        assert!(branding.set("company_name", true.into()).is_err());

        branding.set("company_name_enabled", true.into()).unwrap();
        assert!(branding.company_name_enabled);
    }

    #[test]
    fn test_line_item_total() {
        let item = LineItem::new("Sales", 4.0, "Junior", 11350.0);
        assert_eq!(item.line_total().value(), 45400.0);
    }

    #[test]
    fn test_overflowing_line_total_is_zero() {
        let item = LineItem::new("Huge", 1e200, "Service", 1e200);
        assert!(item.line_total().is_zero());
    }

    #[test]
    fn test_placeholder_line_item() {
        let item = LineItem::placeholder();
        assert_eq!(item.description, "New Item");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.category, "Service");
        assert_eq!(item.rate, 0.0);
    }

    #[test]
    fn test_line_item_field_parse() {
        assert_eq!("rate".parse::<LineItemField>().unwrap(), LineItemField::Rate);
        assert!("price".parse::<LineItemField>().is_err());
    }

    #[test]
    fn test_sample_date_format() {
        assert_eq!(sample().quote.date, "October 18, 2026");
        let early = QuoteState::sample(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert_eq!(early.quote.date, "March 5, 2026");
    }

    #[test]
    fn test_field_value_wire_shape() {
        let text: FieldValue = serde_json::from_str("\"20.00\"").unwrap();
        assert_eq!(text, FieldValue::Text("20.00".into()));

        let flag: FieldValue = serde_json::from_str("false").unwrap();
        assert_eq!(flag, FieldValue::Flag(false));
    }

    #[test]
    fn test_section_wire_shape() {
        assert_eq!(serde_json::to_string(&Section::Tax).unwrap(), "\"tax\"");
        let parsed: Section = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(parsed, Section::Customer);
    }
}
