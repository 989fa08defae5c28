use cabrillo_qso::QsoLayout;
use std::env;
use tracing_subscriber::EnvFilter;

// Usage `qso DE_EXCH DX_EXCH TRANSMITTER LINE`, e.g. `qso 2 2 0 "14313 PH 2018-05-30 2210 KX0XXX 59 10 CO KX9XXX 44 20 IN"`
pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 5 {
        println!("Usage `qso DE_EXCH DX_EXCH TRANSMITTER LINE`");
        return;
    }

    let layout = match (args[1].parse(), args[2].parse(), args[3].as_str()) {
        (Ok(de_exch), Ok(dx_exch), t @ ("0" | "1")) => QsoLayout::new(de_exch, dx_exch, t == "1"),
        _ => {
            eprintln!("Exchange lengths must be numbers and TRANSMITTER either 0 or 1");
            return;
        }
    };

    let line = &args[4];
    match layout.parse(line) {
        Ok(qso) => {
            println!("{:#?}", qso);
            match qso.frequency() {
                Some(freq) if freq.is_band() => println!("Band designator: {}", qso.freq),
                Some(_) => println!("Frequency: {} kHz", qso.freq),
                None => println!("Unknown frequency token: {}", qso.freq),
            }
            println!("QSO: {}", qso);
        }
        Err(e) => match e.field() {
            Some(field) => eprintln!("{} => {} (column `{}`)", line, e, field),
            None => eprintln!("{} => {}", line, e),
        },
    }
}
