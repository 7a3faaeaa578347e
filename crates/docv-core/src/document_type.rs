//! # Document Sub-Type Catalog
//!
//! The document sub-types a proof-of-address check can be told to accept.
//! Wire values are the SCREAMING_SNAKE identifiers the verification backend
//! expects in `check_args.accepted_documents`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A document sub-type accepted by proof-of-address verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentTypeValue {
    BankStatement,
    VatInvoice,
    UtilityBill,
    TenancyAgreement,
    TaxDocument,
    MortgageStatement,
    CreditCardStatement,
    InsurancePolicy,
    LeaseAgreement,
    DriverLicense,
}

impl DocumentTypeValue {
    /// Every sub-type, in the order the backend catalog lists them.
    pub const ALL: [DocumentTypeValue; 10] = [
        DocumentTypeValue::BankStatement,
        DocumentTypeValue::VatInvoice,
        DocumentTypeValue::UtilityBill,
        DocumentTypeValue::TenancyAgreement,
        DocumentTypeValue::TaxDocument,
        DocumentTypeValue::MortgageStatement,
        DocumentTypeValue::CreditCardStatement,
        DocumentTypeValue::InsurancePolicy,
        DocumentTypeValue::LeaseAgreement,
        DocumentTypeValue::DriverLicense,
    ];

    /// The wire identifier sent to the verification backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankStatement => "BANK_STATEMENT",
            Self::VatInvoice => "VAT_INVOICE",
            Self::UtilityBill => "UTILITY_BILL",
            Self::TenancyAgreement => "TENANCY_AGREEMENT",
            Self::TaxDocument => "TAX_DOCUMENT",
            Self::MortgageStatement => "MORTGAGE_STATEMENT",
            Self::CreditCardStatement => "CREDIT_CARD_STATEMENT",
            Self::InsurancePolicy => "INSURANCE_POLICY",
            Self::LeaseAgreement => "LEASE_AGREEMENT",
            Self::DriverLicense => "DRIVER_LICENSE",
        }
    }

    /// Human-readable label for selection UIs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BankStatement => "Bank statement",
            Self::VatInvoice => "VAT invoice",
            Self::UtilityBill => "Utility bill",
            Self::TenancyAgreement => "Signed tenancy or lease agreement",
            Self::TaxDocument => "Tax document",
            Self::MortgageStatement => "Mortgage statement",
            Self::CreditCardStatement => "Credit card statement",
            Self::InsurancePolicy => "Home or renter's insurance policy",
            Self::LeaseAgreement => "Lease agreement",
            Self::DriverLicense => "Driver's license",
        }
    }
}

impl fmt::Display for DocumentTypeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
