use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use number_draw::command::{Command, HELP};
use number_draw::{
    render_text, App, Config, DrawSession, Effect, Intent, Range, StdRandom, TriviaLookup,
    TriviaTicket,
};

#[derive(Parser)]
#[command(name = "number-draw", version)]
#[command(about = "Draw unique random numbers from a range, with undo")]
struct Cli {
    #[arg(long, help = "First number of the range", default_value_t = 1)]
    min: i64,
    #[arg(long, help = "Last number of the range", default_value_t = 100)]
    max: i64,
    #[arg(long, help = "Seed for a reproducible draw order")]
    seed: Option<u64>,
    #[arg(long, help = "Do not fetch trivia for drawn numbers", default_value_t = false)]
    no_trivia: bool,
}

type TriviaAnswer = (TriviaTicket, String);

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let range = Range::new(cli.min, cli.max)?;
    let lookup = if cli.no_trivia {
        None
    } else {
        Some(TriviaLookup::from_config(&config))
    };
    info!(
        "starting with range {range}, trivia {}",
        match &lookup {
            Some(l) if l.is_enabled() => "enabled",
            Some(_) => "without API key",
            None => "off",
        }
    );

    let mut app = App::new(DrawSession::new(range, StdRandom::new(cli.seed)));
    if lookup.is_none() {
        app = app.without_trivia();
    }
    let (tx, mut rx) = mpsc::unbounded_channel::<TriviaAnswer>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}\n");
    print_board(&app);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,
                };
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(err) => {
                        println!("! {err}");
                        continue;
                    }
                };

                match command {
                    Command::Quit => break,
                    Command::Help => println!("{HELP}"),
                    Command::Show => print_board(&app),
                    Command::Json => println!("{}", serde_json::to_string_pretty(&app.view_state())?),
                    Command::Intent(intent) => {
                        let effect = app.handle(intent);
                        dispatch(effect, lookup.as_ref(), &tx);
                        if !matches!(intent, Intent::SetMin(_) | Intent::SetMax(_)) {
                            print_board(&app);
                        }
                    }
                    Command::Range(min, max) => {
                        app.handle(Intent::SetMin(min));
                        app.handle(Intent::SetMax(max));
                        dispatch(app.handle(Intent::ApplyRange), lookup.as_ref(), &tx);
                        print_board(&app);
                    }
                }
            }
            Some((ticket, text)) = rx.recv() => {
                if app.accept_trivia(ticket, text) {
                    if let Some(text) = app.trivia_text() {
                        println!("  {} → {text}", ticket.number);
                    }
                }
            }
        }
    }

    Ok(())
}

fn dispatch(
    effect: Effect,
    lookup: Option<&TriviaLookup>,
    tx: &mpsc::UnboundedSender<TriviaAnswer>,
) {
    match effect {
        Effect::None => {}
        Effect::Rejected(err) => println!("! {err}"),
        Effect::LookupTrivia(ticket) => {
            let lookup = match lookup {
                Some(lookup) => lookup.clone(),
                None => return,
            };
            let tx = tx.clone();
            tokio::spawn(async move {
                let text = lookup.lookup(ticket.number).await;
                if tx.send((ticket, text)).is_err() {
                    debug!("front-end gone, dropping trivia for {}", ticket.number);
                }
            });
        }
    }
}

fn print_board(app: &App) {
    let board = render_text(&app.snapshot(), app.trivia_text());
    println!("{board}");
    if app.trivia_pending() {
        println!("  (looking up trivia...)");
    }
}
