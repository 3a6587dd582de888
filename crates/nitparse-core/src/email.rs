//! Email composition for tender workflows.
//!
//! Pure string templating over the parsed item list. The company and
//! tender details are passed in explicitly; nothing here reads ambient
//! configuration.

use chrono::Local;

use crate::models::config::{CompanyDetails, TenderDetails};
use crate::models::item::Item;

/// Compose a Bill of Quantities (BQ) request for the given tender.
pub fn compose_bq_request(
    items: &[Item],
    tender: &TenderDetails,
    company: &CompanyDetails,
) -> String {
    format!(
        "\
Subject: Request for Bill of Quantities - {tender_name}

Dear Sir/Madam,

We, {name}, are writing to request the Bill of Quantities (BQ) for the following tender:

Tender Reference: {tender_ref}
Tender Name: {tender_name}
Issue Date: {issue_date}

We would appreciate receiving the detailed Bill of Quantities for the items listed in the Notice Inviting Tender.

Total Items: {count}

Please provide the BQ at your earliest convenience to enable us to prepare our quotation.

Thank you for your cooperation.

Best regards,
{name}
{email}
{phone}
",
        tender_name = tender.name_or_default(),
        tender_ref = tender.ref_or_default(),
        issue_date = tender.issue_date_or_default(),
        count = items.len(),
        name = company.name,
        email = company.email,
        phone = company.phone,
    )
}

/// Compose an OEM authorization certificate request, enumerating each
/// item's description.
pub fn compose_oem_authorization(
    items: &[Item],
    oem_name: &str,
    company: &CompanyDetails,
) -> String {
    let current_date = Local::now().format("%B %d, %Y");

    let mut body = format!(
        "\
Subject: Request for OEM Authorization Certificate - {oem_name}

Dear {oem_name} Team,

We, {name}, are an authorized dealer/distributor interested in participating in government tenders.

We kindly request an OEM Authorization Certificate for the following items/products:

",
        name = company.name,
    );

    for (idx, item) in items.iter().enumerate() {
        let description = if item.description.is_empty() {
            "N/A"
        } else {
            &item.description
        };
        body.push_str(&format!("{}. {}\n", idx + 1, description));
    }

    body.push_str(&format!(
        "\nThe authorization certificate should:
- Confirm our authorized dealer/distributor status
- Include validity period
- Be on official company letterhead with signature and stamp
- Include any relevant technical support commitments

This authorization is required for tender participation. We would greatly appreciate receiving this at your earliest convenience.

Thank you for your support.

Best regards,
{name}
{email}
{phone}
Date: {current_date}
",
        name = company.name,
        email = company.email,
        phone = company.phone,
    ));

    body
}
