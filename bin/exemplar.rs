#![deny(clippy::pedantic, clippy::all, clippy::nursery)]

use exemplar::{
    config::MailerKind, internal, logging, Alphabet, BeanCounter, Config, LocalMail, MailChimp,
    MailingList, Mailer, Range,
};

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::load()?;

    for range in [Range::new(10, 50)?, Range::new(1, 5)?] {
        println!("\nRange {range}");
        for n in &range {
            println!("{n}");
        }
    }

    println!("\nAlphabet");
    for letter in &Alphabet::new() {
        println!("{letter}");
    }

    let mut beans = BeanCounter::new(config.counter.counter()?);
    let list = MailingList::from(&config.mailing_list);

    println!("\nMailing list: {}", list.subject_line());
    if let Some(body) = list.message_body() {
        println!("{body}");
    }
    match config.mailer.kind {
        MailerKind::Local => {
            deliver(&list, &mut LocalMail::new(), &mut beans)?;
            deliver(&list, &mut MailChimp::new(), &mut beans)?;
        }
        MailerKind::MailChimp => {
            deliver(&list, &mut MailChimp::new(), &mut beans)?;
            deliver(&list, &mut LocalMail::new(), &mut beans)?;
        }
    }

    internal!(level = INFO, "{} deliveries in total", beans.how_many());

    Ok(())
}

fn deliver(
    list: &MailingList,
    mailer: &mut impl Mailer,
    beans: &mut BeanCounter,
) -> anyhow::Result<()> {
    for _ in 0..list.send_with(mailer)? {
        beans.add_bean();
    }

    Ok(())
}
