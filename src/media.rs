/// Image payload handling for the recipe form and cards
///
/// A picked file is read off the UI thread and carried on the draft as a
/// `data:<mime>;base64,` URI, the same string shape the recipe endpoint
/// uses, so a recipe's image is always just a string.

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rfd::FileDialog;

/// Open the native picker filtered to common image types.
/// Returns None when the user cancels.
pub fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select Recipe Image")
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
        .pick_file()
}

/// Read an image file and encode it as a data URI.
///
/// Unreadable files and files that don't sniff as a known image format
/// yield None, which leaves the draft's image untouched.
pub async fn load_as_data_uri(path: PathBuf) -> Option<String> {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("⚠️  Could not read image {}: {e}", path.display());
            return None;
        }
    };

    let format = match image::guess_format(&bytes) {
        Ok(format) => format,
        Err(_) => {
            eprintln!("⚠️  {} does not look like an image, ignoring", path.display());
            return None;
        }
    };

    Some(encode_data_uri(format.to_mime_type(), &bytes))
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// Decode the payload of a data URI back into raw image bytes.
/// Anything that isn't a data URI yields None.
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (_, payload) = rest.split_once(',')?;
    BASE64.decode(payload).ok()
}

/// Whether an image reference points at a remote server rather than an
/// inline payload.
pub fn is_remote_url(image: &str) -> bool {
    image.starts_with("http://") || image.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_data_uri_round_trip() {
        let uri = encode_data_uri("image/png", &PNG_SIGNATURE);
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_uri(&uri).unwrap(), PNG_SIGNATURE);
    }

    #[test]
    fn test_decode_rejects_plain_urls() {
        assert!(decode_data_uri("http://localhost:3001/images/soup.jpg").is_none());
        assert!(decode_data_uri("").is_none());
        assert!(decode_data_uri("data:image/png;base64").is_none());
    }

    #[test]
    fn test_remote_url_detection() {
        assert!(is_remote_url("http://localhost:3001/images/soup.jpg"));
        assert!(is_remote_url("https://example.com/cake.png"));
        assert!(!is_remote_url("data:image/png;base64,AAAA"));
        assert!(!is_remote_url(""));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let result = load_as_data_uri(PathBuf::from("/nonexistent/picture.png")).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_load_encodes_sniffed_mime() {
        let path = std::env::temp_dir().join("recipe_box_test_image.png");
        tokio::fs::write(&path, PNG_SIGNATURE).await.unwrap();

        let uri = load_as_data_uri(path.clone()).await.unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_uri(&uri).unwrap(), PNG_SIGNATURE);

        let _ = tokio::fs::remove_file(path).await;
    }
}
