use baglib::bag::Bag;
use chrono::Local;
use clap::Parser;
use std::io::Write;

/// Fill a bag with words, take some out again and print what is left
#[derive(Parser)]
struct Cli {
    /// Items to add to the bag, in order
    items: Vec<String>,
    /// Item to remove after all adds, may be given multiple times
    #[arg(short, long)]
    remove: Vec<String>,
}

fn main() {
    let args = Cli::parse();
    env_logger::builder()
        .format(|buf, record| {
            let level_style = buf.default_level_style(record.level()).bold();
            writeln!(
                buf,
                "{}|{level_style}{:7}{level_style:#}|{:10}| {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let mut bag: Bag<String> = args.items.into_iter().collect();
    log::info!("Filled bag with {} items", bag.len());

    for item in &args.remove {
        if bag.remove(item) {
            log::info!("Removed {:?}", item);
        } else {
            log::warn!("{:?} is not in the bag", item);
        }
    }

    let mut cursor = bag.cursor();
    while cursor.has_next() {
        match cursor.next_item() {
            Ok(item) => println!("{item}"),
            Err(err) => {
                log::error!("{err}");
                break;
            }
        }
    }
    log::info!("{} items left, empty: {}", bag.len(), bag.is_empty());
}
