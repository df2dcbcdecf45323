//! Filename suffix recognition for binary animation containers.

/// File suffixes recognized as binary animation containers.
pub const CONTAINER_EXTENSIONS: &[&str] = &["vrma", "glb"];

/// Check whether a filename carries a binary animation container suffix.
///
/// Upload flows call this before attempting metadata extraction; other file
/// types never reach the parser. The check is case-insensitive.
pub fn is_container_filename(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    !ext.is_empty()
        && CONTAINER_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_suffixes() {
        assert!(is_container_filename("wave.vrma"));
        assert!(is_container_filename("wave.glb"));
        assert!(is_container_filename("WAVE.VRMA"));
        assert!(is_container_filename("archive.tar.Glb"));
    }

    #[test]
    fn test_rejected_suffixes() {
        assert!(!is_container_filename("wave.gltf"));
        assert!(!is_container_filename("wave.fbx"));
        assert!(!is_container_filename("wave"));
        assert!(!is_container_filename("wave."));
        assert!(!is_container_filename(""));
        // Suffix must be the final component
        assert!(!is_container_filename("wave.vrma.txt"));
    }
}
