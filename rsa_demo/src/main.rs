use clap::Parser;
use num_bigint::BigUint;
use rsa_toolkit::rsa::{Message, generate, weak_generate};
use rsa_toolkit::WienerAttack;
use std::io::{self, BufRead, Write};

/// Демонстрация RSA: шифрование сообщения и атака Винера на слабый ключ
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Длина модуля основного ключа в битах
    #[arg(long, default_value_t = 1024)]
    bits: u64,

    /// Открытая экспонента, 0 — случайная
    #[arg(long, default_value_t = 0)]
    exponent: u64,

    /// Длина модуля уязвимого ключа в битах
    #[arg(long, default_value_t = 1024)]
    weak_bits: u64,

    /// Сообщение; если не задано, читается строка из stdin
    #[arg(long)]
    message: Option<String>,

    /// Не выполнять атаку Винера
    #[arg(long)]
    skip_attack: bool,
}

fn read_message() -> io::Result<String> {
    print!("Message to encrypt: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    log::info!("Generating a {}-bit RSA key...", args.bits);
    let key = generate(args.bits, &BigUint::from(args.exponent))?;
    println!("--- RSA key ---");
    println!("{key}");
    println!("---------------");

    let text = match args.message {
        Some(text) => text,
        None => read_message()?,
    };

    let ciphertext = Message::new(text).encrypt(&key.public_key())?;
    println!("--- Ciphertext ---");
    println!("{ciphertext}");
    println!("------------------");

    let plaintext = Message::decrypt(&ciphertext, &key)?;
    println!("--- Recovered plaintext ---");
    println!("{plaintext}");
    println!("---------------------------");

    if args.skip_attack {
        return Ok(());
    }

    println!("--- Wiener's attack ---");
    log::info!("Generating a {}-bit weak key...", args.weak_bits);
    let weak = weak_generate(args.weak_bits)?;
    println!("{weak}");

    // атакующему известна только открытая часть
    let public = weak.public_key();
    match WienerAttack::attack(public.e(), public.n()) {
        Some(recovered) => {
            println!("Attack succeeded:");
            println!("{recovered}");
        }
        None => println!("Attack failed: no convergent of e/n yields the key"),
    }

    Ok(())
}
