// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed fallback templates used when generation does not succeed.
//!
//! The table is a `static` and is never mutated, so concurrent generations
//! share it freely.

/// Slot replaced by the recipient's name.
pub const RECIPIENT_SLOT: &str = "{recipient}";

/// Slot replaced by the sender's name.
pub const SENDER_SLOT: &str = "{sender}";

/// An occasion-keyed message skeleton with recipient and sender slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackTemplate {
    /// Occasion this template answers, matched exactly.
    pub occasion: &'static str,
    pub body: &'static str,
}

/// Templates for the occasions that have a dedicated message.
pub static FALLBACK_TEMPLATES: [FallbackTemplate; 4] = [
    FallbackTemplate {
        occasion: "Birthday",
        body: "Dear {recipient}, wishing you a wonderful birthday filled with joy and laughter! Have an amazing celebration. From, {sender}",
    },
    FallbackTemplate {
        occasion: "Wedding",
        body: "Dear {recipient}, congratulations on your special day! Wishing you a lifetime of love and happiness together. From, {sender}",
    },
    FallbackTemplate {
        occasion: "Anniversary",
        body: "Dear {recipient}, happy anniversary! May your love continue to grow stronger with each passing year. From, {sender}",
    },
    FallbackTemplate {
        occasion: "Get Well",
        body: "Dear {recipient}, sending you warm wishes for a speedy recovery. Get well soon! From, {sender}",
    },
];

/// Template for every occasion without a dedicated entry.
pub static DEFAULT_TEMPLATE: FallbackTemplate = FallbackTemplate {
    occasion: "default",
    body: "Dear {recipient}, sending you my warmest wishes on this special occasion. From, {sender}",
};

impl FallbackTemplate {
    /// Looks up the template for `occasion` (exact, case-sensitive), or the default.
    pub fn for_occasion(occasion: &str) -> &'static FallbackTemplate {
        FALLBACK_TEMPLATES
            .iter()
            .find(|template| template.occasion == occasion)
            .unwrap_or(&DEFAULT_TEMPLATE)
    }

    /// Fills both slots in a single pass.
    ///
    /// Names are inserted verbatim and never rescanned, so a name containing
    /// `{sender}` is not expanded.
    pub fn render(&self, recipient: &str, sender: &str) -> String {
        let mut out = String::with_capacity(self.body.len() + recipient.len() + sender.len());
        let mut rest = self.body;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix(RECIPIENT_SLOT) {
                out.push_str(recipient);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(SENDER_SLOT) {
                out.push_str(sender);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}

/// Renders the fallback message for an occasion. Never fails.
pub fn fallback_message(occasion: &str, recipient: &str, sender: &str) -> String {
    FallbackTemplate::for_occasion(occasion).render(recipient, sender)
}
