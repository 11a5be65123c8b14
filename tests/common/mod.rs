#![allow(dead_code)]

pub mod command;

const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

pub fn write_file(dir: &std::path::Path, path: &str, content: &str) {
    let path = dir.join(path);

    // make sure the parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

pub fn read_file(dir: &std::path::Path, path: &str) -> String {
    std::fs::read_to_string(dir.join(path)).expect("Failed to read file")
}

pub fn write_generated_files(dir: &std::path::Path, files_count: usize) -> Vec<(String, String)> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    let mut files = Vec::new();
    while files.len() < files_count {
        let file_name = format!("{}.txt", Word().fake::<String>());
        if files.iter().any(|(name, _)| name == &file_name) {
            continue;
        }
        let file_content = Words(5..10).fake::<Vec<String>>().join(" ");

        write_file(dir, &file_name, &file_content);
        files.push((file_name, file_content));
    }

    files
}
