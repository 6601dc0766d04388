// Share links.
//
// A share link is `<base>/share/<token>`, where the token is the pitch id in
// standard base64 with `=` padding stripped. There is no server behind it;
// `pitch_id_from_token` reverses the encoding for whoever resolves the link.

use crate::types::PitchId;
use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;

/// Build the share link for a pitch. A trailing `/` on `base_url` is dropped.
pub fn shareable_link(base_url: &str, id: &PitchId) -> String {
    format!("{}/share/{}", base_url.trim_end_matches('/'), share_token(id))
}

pub fn share_token(id: &PitchId) -> String {
    STANDARD_NO_PAD.encode(id.as_str())
}

/// Decode a share token. `None` if it is not base64 of a UTF-8 string.
pub fn pitch_id_from_token(token: &str) -> Option<PitchId> {
    let bytes = STANDARD_NO_PAD.decode(token.trim_end_matches('=')).ok()?;
    String::from_utf8(bytes).ok().map(PitchId::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_strips_padding() {
        // "pitch-1" is 7 bytes, which pads to one '='.
        let id = PitchId::from("pitch-1");
        assert_eq!(
            shareable_link("https://pitchcraft.app/", &id),
            "https://pitchcraft.app/share/cGl0Y2gtMQ"
        );
    }

    #[test]
    fn token_round_trips() {
        let id = PitchId::from("pitch-1700000000000-k3j9x0abc");
        let token = share_token(&id);
        assert!(!token.contains('='));
        assert_eq!(pitch_id_from_token(&token), Some(id));
    }

    #[test]
    fn garbage_token_is_none() {
        assert_eq!(pitch_id_from_token("!!!"), None);
    }
}
