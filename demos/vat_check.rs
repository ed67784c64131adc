use vatcheck::{
    ValidatorConfig, VatValidator, ensure_country_prefix, extract_country, extract_number_part,
    normalize,
};

#[tokio::main]
async fn main() {
    // Normalization and country derivation (no network required)
    println!("=== Normalization ===\n");

    let inputs = [
        "nl 123-456-789.b01",
        "DE 129 273 398",
        "GR123456789",
        "  fr-12 345 678 901  ",
        "123456789",
    ];

    for raw in &inputs {
        let n = normalize(raw);
        match extract_country(&n) {
            Some(cc) => println!(
                "  {raw:24} => {n} (country={cc}, number={})",
                extract_number_part(&n, &cc)
            ),
            None => println!("  {raw:24} => {n} (no country prefix)"),
        }
    }

    println!("\n=== Country hints ===\n");

    let hinted = [
        ("123456789B01", Some("NL")),
        ("123456789", Some("xx1")),
        ("ATU12345678", Some("DE")),
    ];

    for (raw, hint) in &hinted {
        let candidate = ensure_country_prefix(&normalize(raw), *hint);
        println!("  {raw} + hint {hint:?} => {candidate}");
    }

    // Live VIES lookup when a VAT number is passed on the command line:
    //   cargo run --example vat_check -- NL123456789B01 [country]
    let mut args = std::env::args().skip(1);
    if let Some(vat) = args.next() {
        println!("\n=== VIES lookup ===\n");
        let hint = args.next();
        let validator = VatValidator::new(ValidatorConfig::default()).expect("client build");
        match validator.details(&vat, hint.as_deref()).await {
            Ok(d) => println!(
                "  {vat}: valid={}, service_available={}, error={}",
                d.valid,
                d.service_available,
                d.error.as_deref().unwrap_or("—")
            ),
            Err(e) => println!("  {vat}: error: {e}"),
        }
    }
}
