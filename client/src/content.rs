//! Static page content: authors, figures, captions, citation.
//!
//! DESIGN
//! ======
//! Every record is a compile-time constant. Components iterate these slices
//! and render one node per record, so editing copy never touches view code.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const PAPER_TITLE: &str = "Imago Obscura";
pub const PAPER_SUBTITLE: &str = "An Image Privacy AI Co-pilot to Enable Identification and Mitigation of Risks";

pub const PAPER_URL: &str = "https://arxiv.org/pdf/2505.20916";
pub const DEMO_URL: &str = "https://www.youtube.com/watch?v=5uK24bBIKj8";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub url: Option<&'static str>,
    pub institution: &'static str,
    pub location: &'static str,
}

pub const AUTHORS: &[Author] = &[
    Author {
        name: "Kyzyl Monteiro",
        url: Some("https://kyzyl.me"),
        institution: "Carnegie Mellon University",
        location: "Pittsburgh, PA, USA",
    },
    Author {
        name: "Yuchen Wu",
        url: None,
        institution: "Tsinghua University",
        location: "Beijing, China",
    },
    Author {
        name: "Sauvik Das",
        url: Some("https://sauvik.com"),
        institution: "Carnegie Mellon University",
        location: "Pittsburgh, PA, USA",
    },
];

/// A standalone figure: the file doubles as the figure's identity for
/// broken-asset tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Figure {
    pub file: &'static str,
    pub alt: &'static str,
    /// Short label rendered under the thumbnail.
    pub label: &'static str,
    /// Long caption shown in the lightbox.
    pub caption: &'static str,
}

pub const TEASER: Figure = Figure {
    file: "teaser.jpg",
    alt: "Imago Obscura teaser showing system flow from input to recommendations and edited output",
    label: "Imago Obscura: A privacy-focused image AI-copilot that enables users to: 1) articulate their image sharing intent and privacy concerns; 2) become aware of multiple contextually pertinent image privacy risks; and 3) apply recommended obfuscation techniques for the risks they choose to address, enabling informed decision-making about image sharing.",
    caption: "Imago Obscura: A privacy-focused image AI-copilot that enables users to: (1) articulate their image sharing intent and privacy concerns; (2) become aware of multiple contextually pertinent image privacy risks; and (3) apply recommended obfuscation techniques for the risks they choose to address, enabling informed decision-making about image sharing.",
};

pub const METHODOLOGY: Figure = Figure {
    file: "methodology.jpg",
    alt: "Methodology overview",
    label: "Methodology overview",
    caption: "Overview of our methodology. We conducted a formative study to derive design requirements, built a tool based on those requirements, and evaluated it with end-users using their personal photos.",
};

pub const METHODOLOGY_TEXT: &str = "We followed a three-phased, human-centered design process: (1) a formative study with seven image-editing experts to derive design requirements; (2) building the Imago Obscura system guided by those requirements; and (3) a lab study with fifteen participants using their own photos to evaluate the system’s effectiveness.";

pub const IMPLEMENTATION: Figure = Figure {
    file: "implementation.jpg",
    alt: "Implementation overview",
    label: "Implementation overview",
    caption: "Step-by-step outputs of each model in the Imago Obscura pipeline. (1) The vision model detects and labels objects with bounding boxes. (2) The MLLM identifies sensitive content and recommends obfuscation strategies (shown as a JSON object). (3) The vision model re-localizes the sensitive elements identified by the MLLM. (4) The segmentation model refines the selected region with precision. (5) The image generator replaces the selected region using the chosen obfuscation method.",
};

pub const IMPLEMENTATION_TEXT: &str = "Our system comprises of an ensemble of AI models: a vision model that identifies and annotates objects in users' images, a multimodal large language model that identifies pertinent risks, a segmentation model and an image generation model that automatically and precisely applies obfuscation techniques. This ensemble is integrated into an open-source image editing tool.";

/// One row of the examples gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Example {
    pub title: &'static str,
    pub file: &'static str,
    pub caption: &'static str,
}

impl Example {
    /// Gallery thumbnails are labelled with the title; the lightbox gets the
    /// long caption.
    pub const fn figure(&self) -> Figure {
        Figure { file: self.file, alt: self.title, label: self.title, caption: self.caption }
    }
}

pub const EXAMPLES: &[Example] = &[
    Example {
        title: "Self-Disclosure Risk",
        file: "self-disclosure.jpg",
        caption: "Imago Obscura addresses “self disclosure risks”. (1) Identifies that the numbered candle can reveal personal information. (2) Recommends removing the candle from the image. (3) Precisely selects the sensitive area, the candle, and applies inpainting.",
    },
    Example {
        title: "Identity Exposure Risk",
        file: "identity.jpg",
        caption: "Imago Obscura addresses “identity exposure risk”. (1) Identifies that the tattoo can reveal the person’s identity. (2) Recommends to replace the tattoo with a new one. (3) Precisely selects the sensitive area, the tattoo, and applies generative content replacement.",
    },
    Example {
        title: "Confidential Information Leakage Risk",
        file: "confidential.jpg",
        caption: "Imago Obscura addresses “confidential information leakage risk”. (1) Identifies that the notes on the board can reveal confidential information. (2) Recommends to blur the notes on the board. (3) Precisely selects the sensitive area, the board, and applies blur.",
    },
    Example {
        title: "Location Exposure Risk",
        file: "location.jpg",
        caption: "Imago Obscura addresses “location exposure risk”. (1) Identifies that the window view can reveal the location. (2) Recommends to replace the window view. (3) Precisely selects the sensitive area, the window, and applies generative content replacement.",
    },
    Example {
        title: "Bystander Risk",
        file: "bystander.jpg",
        caption: "Imago Obscura addresses “bystander privacy risk”. (1) Identifies that the bystanders’ privacy might be at risk. (2) Recommends to generate a new running crowd scene. (3) Precisely selects the sensitive area, the bystander, and applies generative content replacement.",
    },
];

/// One chart card in the results grid. The caption is used for the label,
/// the alt text, and the lightbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultChart {
    pub file: &'static str,
    pub caption: &'static str,
}

impl ResultChart {
    pub const fn figure(&self) -> Figure {
        Figure { file: self.file, alt: self.caption, label: self.caption, caption: self.caption }
    }
}

pub const RESULTS: &[ResultChart] = &[
    ResultChart { file: "spaf_chart.png", caption: "User Perceptions of Imago Obscura's Support" },
    ResultChart { file: "dr_chart.png", caption: "User Perceptions of Imago Obscura Satisfying the Design Requirements" },
    ResultChart { file: "change_chart.png", caption: "Changes in Participants' Perceptions After Using the System" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultBullet {
    pub heading: &'static str,
    pub text: &'static str,
    pub note: Option<&'static str>,
}

pub const RESULT_BULLETS: &[ResultBullet] = &[
    ResultBullet { heading: "Awareness", text: "Participants identified more risks per image.", note: None },
    ResultBullet { heading: "Ability", text: "Participants selected more suitable obfuscations.", note: None },
    ResultBullet {
        heading: "Confidence to share",
        text: "5× increase in overall confidence • 80× increase on previously withheld images",
        note: Some("Measured via self-reported confidence in our study."),
    },
];

/// Always-visible lead of the abstract.
pub const ABSTRACT_INTRO: &str = "Users often struggle to navigate the privacy / publicity boundary in sharing images online: they may lack awareness of image privacy risks or the ability to apply effective mitigation strategies. To address this challenge, we introduce and evaluate Imago Obscura, an intent-aware AI-powered image-editing copilot that enables users to identify and mitigate privacy risks in images they intend to share.";

/// Remainder of the abstract, shown once expanded. Starts with a space so it
/// reads on from the intro.
pub const ABSTRACT_REST: &str = " Driven by design requirements from a formative user study with 7 image-editing experts, Imago Obscura enables users to articulate their image-sharing intent and privacy concerns. The system uses these inputs to surface contextually pertinent privacy risks, and then recommends and facilitates application of a suite of obfuscation techniques found to be effective in prior literature — e.g., inpainting, blurring, and generative content replacement. We evaluated Imago Obscura with 15 end-users in a lab study and found that it improved users’ awareness of image privacy risks and their ability to address them, enabling more informed sharing decisions.";

pub const CITATION_BIBTEX: &str = "@article{monteiro2025imago,
  title={Imago Obscura: An Image Privacy AI Co-pilot to Enable Identification and Mitigation of Risks},
  author={Monteiro, Kyzyl and Wu, Yuchen and Das, Sauvik},
  journal={arXiv preprint arXiv:2505.20916},
  year={2025}
}";
