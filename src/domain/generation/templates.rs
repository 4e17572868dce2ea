//! Canned responses used when no completion model is reachable.

const EMAIL: &str = "Subject: Re: Your Request

Dear [Recipient],

Thank you for reaching out. I wanted to follow up on your message regarding the topic you mentioned.

I'll be happy to help with this matter and will get back to you with more details soon.

Best regards,
[Your Name]";

const ESSAY: &str = "Introduction

The topic you've raised is indeed worth exploring in depth. There are several important aspects to consider when examining this subject.

Main Points

First, we should acknowledge the complexity of the issue. The various factors involved create a multifaceted situation that requires careful analysis.

Furthermore, the implications extend beyond the immediate scope, affecting related areas that deserve attention.

Conclusion

In summary, this topic presents both challenges and opportunities. A thoughtful approach will yield the best outcomes for all involved parties.";

const STORY: &str = "It was a day like any other, until everything changed. The morning sun streamed through the windows, casting long shadows across the room.

As I sat there, contemplating the prompt you've given me, I realized that every story begins with a single moment of inspiration. This moment, right now, could be the beginning of something extraordinary.

The characters in this tale are not yet fully formed, but they're waiting in the wings, ready to spring to life with the right combination of words and imagination.";

const GENERAL: &str = "Thank you for your prompt. I understand you're looking for assistance with writing content.

Based on your request, here are some thoughts that might help guide your writing:

Consider your audience and what they need to know. Structure your ideas in a logical flow that builds understanding step by step. Use clear, engaging language that matches your personal style.

Remember that good writing often comes from revision and refinement, so don't worry about getting everything perfect in the first draft.";

/// Offline response family, picked by keywords in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfflineTemplate {
    Email,
    Essay,
    Story,
    General,
}

impl OfflineTemplate {
    /// Picks a template from the lowercased prompt. First match wins.
    pub fn for_prompt(prompt: &str) -> Self {
        let lower = prompt.to_lowercase();
        if lower.contains("email") {
            Self::Email
        } else if lower.contains("essay") || lower.contains("write about") {
            Self::Essay
        } else if lower.contains("story") || lower.contains("creative") {
            Self::Story
        } else {
            Self::General
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Email => EMAIL,
            Self::Essay => ESSAY,
            Self::Story => STORY,
            Self::General => GENERAL,
        }
    }
}

/// Template text for a prompt.
pub fn offline_response(prompt: &str) -> &'static str {
    OfflineTemplate::for_prompt(prompt).text()
}
