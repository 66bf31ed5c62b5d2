mod repl {
    use postfix::PostfixConverter;

    pub fn evalexpr(input: &str) {
        let mut conv = PostfixConverter::new();
        match conv.convert(input) {
            Err(e) => println!("Parse error: {:?}", e),
            Ok(()) => {
                println!("postfix: {}", conv.render_postfix(false));
                match conv.evaluate() {
                    Err(e) => println!("Eval error: {:?}", e),
                    Ok(result) => println!("{}", result),
                }
            }
        };
    }
}

fn main() -> rustyline::Result<()> {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&input[..]);
        return Ok(());
    }
    let histpath = dirs::home_dir().map(|h| h.join(".rpx_history"));
    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(histpath) = &histpath {
        if rl.load_history(histpath).is_err() {
            println!("No history yet");
        }
    }
    while let Ok(input) = rl.readline(">> ") {
        if input.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(input.as_str())?;
        repl::evalexpr(&input[..]);
    }
    if let Some(histpath) = &histpath {
        rl.save_history(histpath)?;
    }
    Ok(())
}
