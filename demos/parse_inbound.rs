use std::io::{self, Read};

use globelabs::parse_inbound_sms;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut raw_body = String::new();
    io::stdin().read_to_string(&mut raw_body)?;

    let record = parse_inbound_sms(raw_body.trim_end())?;
    println!(
        "from: {:?}, to: {:?}, message: {:?}",
        record.sender(),
        record.recipient(),
        record.message()
    );
    for (key, value) in record.iter() {
        println!("  {key} = {value}");
    }

    Ok(())
}
