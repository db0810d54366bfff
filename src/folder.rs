use crate::filename;

const DEFAULT_FOLDER: &str = "files";

// Icons go to img/ but are linked rather than embedded.
const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

pub fn classify(name: &str) -> &'static str {
    match filename::extension(name).as_str() {
        ".png" | ".jpg" | ".jpeg" | ".gif" | ".svg" | ".webp" | ".ico" => "img",
        ".json" | ".xml" | ".csv" | ".yaml" | ".yml" | ".toml" => "data",
        ".pdf" | ".md" | ".txt" | ".doc" | ".docx" => "docs",
        ".mp4" | ".mov" | ".avi" | ".webm" => "video",
        ".mp3" | ".wav" | ".ogg" | ".flac" => "audio",
        ".zip" | ".tar" | ".gz" | ".rar" => "archives",
        _ => DEFAULT_FOLDER,
    }
}

pub fn is_image(name: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&filename::extension(name).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_ignore_extension_case() {
        assert_eq!(classify("photo.PNG"), "img");
        assert_eq!(classify("photo.png"), "img");
    }

    #[test]
    fn should_classify_each_group() {
        assert_eq!(classify("favicon.ico"), "img");
        assert_eq!(classify("export.yml"), "data");
        assert_eq!(classify("readme.md"), "docs");
        assert_eq!(classify("clip.webm"), "video");
        assert_eq!(classify("song.flac"), "audio");
        assert_eq!(classify("bundle.gz"), "archives");
    }

    #[test]
    fn should_fall_back_to_files() {
        assert_eq!(classify("binary.exe"), "files");
        assert_eq!(classify("Makefile"), "files");
        assert_eq!(classify(""), "files");
    }

    #[test]
    fn should_detect_images() {
        assert!(is_image("photo.JPG"));
        assert!(is_image("diagram.svg"));
        assert!(!is_image("favicon.ico"));
        assert!(!is_image("notes.txt"));
    }
}
