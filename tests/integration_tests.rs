// Integration tests for gordle
// These tests verify that all modules work together correctly

use std::io::Cursor;
use std::num::NonZeroUsize;

use gordle::cli::CliInterface;
use gordle::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn play(wordbank: &[String], settings: &Settings, input: &str) -> (Vec<Outcome>, String) {
    let mut interface =
        CliInterface::new(Cursor::new(input.to_string()), Vec::new()).with_glyphs(Glyphs::LETTERS);
    let mut rng = StdRng::seed_from_u64(2024);
    let outcomes = game_loop(wordbank, settings, &mut rng, &mut interface).unwrap();
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (outcomes, output)
}

fn settings(word_length: usize, max_attempts: usize) -> Settings {
    Settings {
        word_length,
        max_attempts: NonZeroUsize::new(max_attempts).unwrap(),
        cheat: false,
    }
}

#[test]
fn test_end_to_end_win() {
    // Dictionary loading -> word selection -> game loop, with a single candidate
    // of the requested length so the secret is known.
    let wordbank = load_wordbank_from_str("cat\nhouse\nmouse\n");

    let (outcomes, output) = play(&wordbank, &settings(3, 3), "dog\nbat\ncat\n");

    assert_eq!(outcomes, vec![Outcome::Won]);
    assert_eq!(
        output,
        "length 3 ; you have 3 attempts\n\
         XXX\n\
         XGG\n\
         GGG\n\
         🎉 you won\n\
         type ':next' to play again or ':exit' to quit\n\
         Exiting.\n"
    );
}

#[test]
fn test_end_to_end_loss() {
    let wordbank = load_wordbank_from_str("cat\n");

    let (outcomes, output) = play(&wordbank, &settings(3, 2), "dog\nbat\n");

    assert_eq!(outcomes, vec![Outcome::Lost]);
    assert!(output.contains("😔 you lost, the correct word was CAT"));
}

#[test]
fn test_lowercase_and_padded_guesses_are_accepted() {
    let wordbank = load_wordbank_from_str("crane\n");

    let (outcomes, _) = play(&wordbank, &settings(5, 5), "  crane  \n");

    assert_eq!(outcomes, vec![Outcome::Won]);
}

#[test]
fn test_wrong_length_guess_reprompts_without_penalty() {
    let wordbank = load_wordbank_from_str("crane\n");

    let (outcomes, output) = play(&wordbank, &settings(5, 1), "cranes\ncran\ncrane\n");

    assert_eq!(outcomes, vec![Outcome::Won]);
    assert_eq!(output.matches("please provide a 5-letters word").count(), 2);
}

#[test]
fn test_non_letters_are_rejected() {
    let wordbank = load_wordbank_from_str("crane\n");

    let (outcomes, output) = play(&wordbank, &settings(5, 1), "cr4ne\n\ncrane\n");

    assert_eq!(outcomes, vec![Outcome::Won]);
    assert_eq!(output.matches("letters only").count(), 2);
}

#[test]
fn test_guess_after_game_over() {
    let wordbank = load_wordbank_from_str("crane\n");

    let (outcomes, output) = play(&wordbank, &settings(5, 5), "crane\ncrane\n:exit\n");

    assert_eq!(outcomes, vec![Outcome::Won]);
    assert!(output.contains("the game is over"));
}

#[test]
fn test_next_starts_new_round() {
    let wordbank = load_wordbank_from_str("crane\n");

    let (outcomes, output) = play(
        &wordbank,
        &settings(5, 1),
        "slate\n:next\ncrane\n:next\n:exit\n",
    );

    assert_eq!(outcomes, vec![Outcome::Lost, Outcome::Won]);
    assert_eq!(output.matches("length 5 ; you have 1 attempts").count(), 3);
}

#[test]
fn test_command_words_can_be_secrets() {
    let wordbank = load_wordbank_from_str("next\n");
    let (outcomes, output) = play(&wordbank, &settings(4, 5), "next\n");
    assert_eq!(outcomes, vec![Outcome::Won]);
    assert_eq!(output.matches("length 4 ; you have 5 attempts").count(), 1);

    let wordbank = load_wordbank_from_str("exit\n");
    let (outcomes, _) = play(&wordbank, &settings(4, 5), "exit\n");
    assert_eq!(outcomes, vec![Outcome::Won]);
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let wordbank = load_wordbank_from_str("crane\n");
    let input = Cursor::new(b"\xff\xfe\ncrane\n".to_vec());
    let mut interface = CliInterface::new(input, Vec::new()).with_glyphs(Glyphs::LETTERS);
    let mut rng = StdRng::seed_from_u64(2024);

    let outcomes = game_loop(&wordbank, &settings(5, 5), &mut rng, &mut interface).unwrap();
    let output = String::from_utf8(interface.into_writer()).unwrap();

    assert_eq!(outcomes, vec![Outcome::Won]);
    assert!(output.contains("letters only"));
    assert!(output.contains("🎉 you won"));
}

#[test]
fn test_dictionary_entries_with_punctuation_are_never_secrets() {
    let wordbank = load_wordbank_from_str("o'neil\nsilver\n");
    let (outcomes, _) = play(&wordbank, &settings(6, 5), "silver\n");
    assert_eq!(outcomes, vec![Outcome::Won]);
}

#[test]
fn test_cheat_mode_prints_word() {
    let wordbank = load_wordbank_from_str("crane\n");
    let settings = Settings {
        cheat: true,
        ..settings(5, 5)
    };

    let (_, output) = play(&wordbank, &settings, ":exit\n");

    assert!(output.starts_with("length 5 ; you have 5 attempts\nword: CRANE\n"));
}

#[test]
fn test_no_word_of_requested_length() {
    let wordbank = load_wordbank_from_str("test\ntests\n");
    let mut interface = CliInterface::new(Cursor::new("test\n"), Vec::new());
    let mut rng = StdRng::seed_from_u64(1);

    let result = game_loop(&wordbank, &settings(6, 5), &mut rng, &mut interface);

    assert!(matches!(result, Err(WordbankError::NoWordFound { length: 6 })));
    assert!(interface.into_writer().is_empty());
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let wordbank_path = std::env::temp_dir().join("gordle_test_custom_wordbank.txt");
    {
        let mut file = File::create(&wordbank_path).unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "kiwi").unwrap();
        writeln!(file, "banana").unwrap();
    }

    let (wordbank, _) = resolve_wordbank(Some(wordbank_path.as_path())).unwrap();
    assert_eq!(wordbank, vec!["APPLE", "KIWI", "BANANA"]);

    let (outcomes, _) = play(&wordbank, &settings(4, 6), "kiwi\n");
    assert_eq!(outcomes, vec![Outcome::Won]);

    std::fs::remove_file(&wordbank_path).unwrap();
}

#[test]
fn test_pick_word_from_reader_then_play() {
    let mut rng = StdRng::seed_from_u64(5);
    let word = pick_word_from_reader(Cursor::new("test\ntests\n"), 4, &mut rng).unwrap();
    assert_eq!(word, "TEST");

    let mut game = Game::new(NonZeroUsize::new(2).unwrap(), word);
    let (feedback, outcome) = game.submit_guess("SETT").unwrap();
    assert_eq!(feedback.render(&Glyphs::LETTERS), "YGYG");
    assert_eq!(outcome, Outcome::Continue);

    let (_, outcome) = game.submit_guess("TEST").unwrap();
    assert_eq!(outcome, Outcome::Won);
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_documented_scoring_examples() {
    let yyg: FullFeedback = "YYG".parse().unwrap();
    assert_eq!(score("aba", "baa").unwrap(), yyg);

    let expected = vec![
        Feedback::Absent,
        Feedback::Present,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Correct,
        Feedback::Correct,
        Feedback::Correct,
    ];
    assert_eq!(score("testing", "xsesing").unwrap().as_slice(), expected.as_slice());

    assert!(score("", "").unwrap().is_empty());
    assert!(matches!(
        score("ab", "a"),
        Err(GameError::LengthMismatch {
            expected: 2,
            actual: 1
        })
    ));
}

#[test]
fn test_embedded_wordbank_supports_default_length() {
    let wordbank = load_wordbank_from_str(gordle::wordbank::EMBEDDED_WORDBANK);
    let mut rng = StdRng::seed_from_u64(11);
    let word = pick_word(&wordbank, 5, &mut rng).unwrap();
    assert_eq!(word.chars().count(), 5);
    assert_eq!(word, word.to_uppercase());
}
