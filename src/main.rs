use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tf_idf_ranker::{tokenize, Document, TFIDFRanker, TermFrequency};

const DEFAULT_NUM_RESULTS: usize = 5;

/// Collect the corpus files: every `.txt` directly under `dir`, sorted so
/// document indices are deterministic across runs.
fn collect_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("cannot read corpus directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    Ok(files)
}

/// Read one corpus file into a document. The first three lines are the
/// preamble (url, author, title); the rest is the body. Files that are not
/// valid UTF-8 are read lossily rather than skipped whole.
fn load_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let mut lines = content.lines();
    let url = lines.next().unwrap_or("").trim().to_string();
    let author = lines.next().unwrap_or("").trim().to_string();
    let title = lines.next().unwrap_or("").trim().to_string();
    let body: String = lines.collect::<Vec<&str>>().join("\n");

    let tokens = tokenize(&body);
    let term_freq = TermFrequency::from_tokens(&tokens);
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown");
    Ok(Document::new(term_freq, filename, &url, &author, &title))
}

fn load_corpus(dir: &Path) -> Result<TFIDFRanker> {
    let start = Instant::now();
    eprintln!("[stage] scanning {} ...", dir.display());
    let files = collect_text_files(dir)?;
    if files.is_empty() {
        eprintln!("[warn] no .txt files found in {}", dir.display());
    }

    let mut ranker = TFIDFRanker::new();
    for path in &files {
        match load_document(path) {
            Ok(document) => ranker.add_doc(document),
            Err(err) => eprintln!("[warn] skipped {}: {err:#}", path.display()),
        }
    }
    eprintln!(
        "[done] indexed {} docs in {:.2}s",
        ranker.doc_num(),
        start.elapsed().as_secs_f64()
    );
    Ok(ranker)
}

/// Prompt on stdout, read one line from stdin. `None` on end of input.
fn prompt_line(stdin: &io::Stdin, text: &str) -> Result<Option<String>> {
    println!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_query(ranker: &TFIDFRanker, query_text: &str, num_results: usize) -> Result<()> {
    let tokens = tokenize(query_text);
    let query = TermFrequency::from_tokens(&tokens);
    let hits = ranker.rank(&query, num_results)?;

    println!("User query: {}", tokens.join(" "));
    println!("Closest documents:\n");
    for (position, entry) in hits.iter().enumerate() {
        let Some(document) = ranker.get_doc(entry.index) else {
            continue;
        };
        println!(
            "Result {} Cosine Similarity: {:.6}",
            position + 1,
            entry.score
        );
        println!("File Name: {}", document.filename);
        println!("url: {}", document.url);
        println!("Author: {}", document.author);
        println!("Title: {}\n", document.title);
    }
    Ok(())
}

fn main() -> Result<()> {
    let dir = env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let ranker = load_corpus(Path::new(&dir))?;
    if ranker.doc_num() == 0 {
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        let Some(query_text) = prompt_line(&stdin, "What would you like to search for?")? else {
            break;
        };
        if query_text.is_empty() {
            break;
        }

        let Some(count_text) = prompt_line(&stdin, "How many documents to retrieve?")? else {
            break;
        };
        let num_results = match count_text.parse::<usize>() {
            Ok(num) => num,
            Err(_) => {
                eprintln!("[warn] not a number, defaulting to {DEFAULT_NUM_RESULTS}");
                DEFAULT_NUM_RESULTS
            }
        };

        run_query(&ranker, &query_text, num_results)?;
        println!();
    }
    Ok(())
}
