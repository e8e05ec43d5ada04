//! The pattern table: grouped rules, phrase dictionary, abbreviations,
//! filler words and the secondary cleanup list.
//!
//! Pure data. Order inside every list is significant and is the order the
//! engine applies it in.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use sq_core::{GroupName, GroupToggles, Result};

use crate::rules::{Rule, RuleGroup};
use crate::scan;

type Pairs = &'static [(&'static str, &'static str)];

const REMOVE_FILLERS: Pairs = &[
    (r"\b(please|thank you|just wondering|i would like to know|can you please)\b", ""),
    (r"\b(i|we|you|they)\s+(think|believe|feel|wonder|hope|wish)\s+that\b", ""),
    (r"\b(it|this|that)\s+(is|was|seems)\s+(to be|like)\b", ""),
];

const REMOVE_GREETINGS: Pairs = &[
    (r"\b(hi|hello|hey|greetings|good (morning|afternoon|evening))\b", ""),
];

const STRIP_MODIFIERS: Pairs = &[
    (r"\b(really|very|quite|extremely|highly|somewhat|rather|fairly|pretty)\s+", ""),
    (r"\b(i think|honestly speaking|actually|basically|essentially|practically|i mean|you know|like|sort of|kind of)\b", ""),
    (r"\b(in my opinion|from my perspective|as far as i can tell|as i see it)\b", ""),
];

const COLLAPSE_PHRASES: Pairs = &[
    (r"\b(utilize|utilise)\b", "use"),
    (r"\b(terminate|cease|discontinue)\b", "end"),
    (r"\b(assist with|aid in|help with)\b", "help"),
    (r"\b(in order to|so as to|for the purpose of)\b", "to"),
    (r"\b(due to|owing to|on account of|because of) the fact that\b", "because"),
    (r"\b(make|come to) a decision\b", "decide"),
    (r"\b(take|give) (into )?consideration\b", "consider"),
    (r"\b(at this point|at the present time|currently)\b", "now"),
    (r"\b(would like to|wish to|desire to)\b", "want to"),
    (r"\b(in terms of|with regard to|regarding|concerning)\b", "about"),
    (r"\b(the (way|manner) in which)\b", "how"),
    (r"\b(despite|in spite of) the fact that\b", "although"),
    (r"\b(in the event that|in case)\b", "if"),
    (r"\b(could|would|can) you (explain|tell me about|describe|share|show|help me understand)\b", "explain"),
    (r"\b(what is|tell me|describe) the (difference|distinction) between\b", "compare"),
    (r"\b(how does|in what way|by what means)\b", "how"),
    (r"\b(what are|list|name) the (benefits|advantages|pros)\b", "benefits of"),
    (r"\b(what are|list|name) the (drawbacks|disadvantages|cons)\b", "drawbacks of"),
];

const SENTENCE_COMPRESSION: Pairs = &[
    (r"\b(it is|there is|there are)\s+(important|notable|worth noting|worth mentioning)\s+that\b", ""),
    (r"\b(as you may know|as you might know|as you probably know)\b", ""),
    (r"\b(according to|based on|per)\s+(research|studies|data|findings)\b", ""),
    (r"\b(in general|generally speaking|typically|usually)\b", ""),
    (r"\b(for example|for instance|such as|like)\b", "e.g."),
    (r"\b(that is|in other words|namely|specifically)\b", "i.e."),
];

/// Capture-and-reinsert rules. They change nothing; the group is kept so the
/// vocabulary it lists stays visible and toggleable.
const QUESTION_PRESERVATION: &[&str] = &[
    r"\b(how|what|when|where|why|who|which)\b",
    r"\b(can|could|would|will|should|might|may)\b",
    r"\b(explain|describe|tell|show|help)\b",
    r"\b(compare|contrast|analyze|evaluate)\b",
    r"\b(benefits|advantages|pros|drawbacks|disadvantages|cons)\b",
    r"\b(impact|effect|influence|role)\b",
    r"\b(future|potential|possibilities|developments)\b",
    r"\b(current|present|existing|modern)\b",
    r"\b(technology|innovation|advancement|development)\b",
    r"\b(artificial intelligence|AI|machine learning|ML)\b",
    r"\b(blockchain|NFT|cryptocurrency|digital)\b",
    r"\b(healthcare|medical|wellness|well-being)\b",
    r"\b(creativity|art|design|innovation)\b",
    r"\b(privacy|security|safety|protection)\b",
    r"\b(access|availability|distribution|reach)\b",
    r"\b(transformation|change|evolution|development)\b",
    r"\b(application|implementation|use|utilization)\b",
    r"\b(consideration|aspect|factor|element)\b",
    r"\b(implication|consequence|result|outcome)\b",
    r"\b(integration|incorporation|adoption|implementation)\b",
];

/// Verbose phrase → short form.
pub const VERBOSE_PHRASES: Pairs = &[
    ("in order to", "to"),
    ("due to the fact that", "because"),
    ("at this point in time", "now"),
    ("for the purpose of", "for"),
    ("in the event that", "if"),
    ("with regard to", "regarding"),
    ("in spite of the fact that", "although"),
    ("on the basis of", "based on"),
];

/// Technical term → abbreviation.
pub const ABBREVIATIONS: Pairs = &[
    ("artificial intelligence", "AI"),
    ("machine learning", "ML"),
    ("natural language processing", "NLP"),
    ("large language model", "LLM"),
    ("application programming interface", "API"),
];

pub const FILLER_WORDS: &[&str] = &[
    "actually", "basically", "essentially", "literally",
    "very", "really", "quite", "rather", "somewhat",
];

/// Substitutions applied once more after the secondary list. Literal, not
/// word-bounded.
const TRAILING_ABBREVIATIONS: Pairs = &[
    ("for example", "e.g."),
    ("that is", "i.e."),
];

fn pairs(list: Pairs) -> Result<Vec<Rule>> {
    list.iter().map(|&(p, r)| Rule::regex(p, r)).collect()
}

fn words(list: Pairs) -> Result<Vec<Rule>> {
    list.iter().map(|&(p, r)| Rule::word(p, r)).collect()
}

fn punctuation_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::regex(r"\s*[,;]\s*(?:and|or)\s+", " ")?,
        Rule::scan(r"(?<!\.)\.\.\.", scan::strip_ellipses),
        // Look-ahead form: `\s*[,;]\s*(?=\band\b|\bor\b)`; the conjunction is
        // captured and put back instead.
        Rule::regex(r"\s*[,;]\s*\b(and|or)\b", " ${1}")?,
        Rule::regex(r"\([^)]*\)\s*[,;]?", "")?,
        Rule::regex(r"([.,!?])\s*([.,!?])+", "${1}")?,
        Rule::regex(r"\s+([.,!?])", "${1}")?,
        Rule::regex(r"([.,!?])\s+", "${1} ")?,
    ])
}

fn secondary_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::regex("in order to", "to")?,
        Rule::regex("that being said", "")?,
        Rule::regex("as a matter of fact", "")?,
        Rule::regex("in other words", "")?,
        Rule::regex("would like to", "want to")?,
        Rule::regex("in terms of", "about")?,
        Rule::regex("with regard to", "about")?,
        Rule::regex(r"\b(very|really|quite|extremely|highly)\s+", "")?,
        Rule::regex(r"\b(actually|basically|essentially|practically)\s+", "")?,
        Rule::scan(r"\b(\w+)\s+\1\b", scan::collapse_repeated_words),
        Rule::regex_case_sensitive(r"([.,!?])\s*([.,!?])+", "${1}")?,
        Rule::regex_case_sensitive(r"\s+([.,!?])", "${1}")?,
        Rule::regex_case_sensitive(r"([.,!?])\s+", "${1} ")?,
        Rule::regex_case_sensitive(r"\s+", " ")?,
        Rule::regex_case_sensitive(r"^\s+|\s+$", "")?,
    ])
}

/// Immutable rule data shared by every compressor.
#[derive(Debug, Clone)]
pub struct PatternTable {
    groups: Vec<RuleGroup>,
    phrases: Vec<Rule>,
    abbreviations: Vec<Rule>,
    fillers: HashSet<&'static str>,
    secondary: Vec<Rule>,
    trailing: Vec<Rule>,
}

impl PatternTable {
    /// Compile the built-in table.
    pub fn standard() -> Result<Self> {
        let groups = vec![
            RuleGroup::new(GroupName::RemoveFillers, pairs(REMOVE_FILLERS)?),
            RuleGroup::new(GroupName::RemoveGreetings, pairs(REMOVE_GREETINGS)?),
            RuleGroup::new(GroupName::StripModifiers, pairs(STRIP_MODIFIERS)?),
            RuleGroup::new(GroupName::CollapsePhrases, pairs(COLLAPSE_PHRASES)?),
            RuleGroup::new(GroupName::PunctuationCompression, punctuation_rules()?),
            RuleGroup::new(GroupName::SentenceCompression, pairs(SENTENCE_COMPRESSION)?),
            RuleGroup::new(
                GroupName::QuestionPreservation,
                QUESTION_PRESERVATION
                    .iter()
                    .map(|&p| Rule::regex(p, "${1}"))
                    .collect::<Result<_>>()?,
            ),
        ];

        let table = Self {
            groups,
            phrases: words(VERBOSE_PHRASES)?,
            abbreviations: words(ABBREVIATIONS)?,
            fillers: FILLER_WORDS.iter().copied().collect(),
            secondary: secondary_rules()?,
            trailing: TRAILING_ABBREVIATIONS
                .iter()
                .map(|&(p, r)| Rule::regex(p, r))
                .collect::<Result<_>>()?,
        };
        tracing::debug!(
            groups = table.groups.len(),
            grouped_rules = table.groups.iter().map(|g| g.rules.len()).sum::<usize>(),
            phrases = table.phrases.len(),
            abbreviations = table.abbreviations.len(),
            secondary = table.secondary.len(),
            "compiled pattern table"
        );
        Ok(table)
    }

    /// Copy of this table with group enable flags taken from `toggles`.
    pub fn with_toggles(&self, toggles: &GroupToggles) -> Self {
        let mut table = self.clone();
        for group in &mut table.groups {
            group.enabled = toggles.is_enabled(group.name);
        }
        table
    }

    /// Copy of this table with one group switched on or off.
    pub fn with_group(&self, name: GroupName, enabled: bool) -> Self {
        let mut table = self.clone();
        if let Some(group) = table.groups.iter_mut().find(|g| g.name == name) {
            group.enabled = enabled;
        }
        table
    }

    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    pub fn group(&self, name: GroupName) -> Option<&RuleGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn phrases(&self) -> &[Rule] {
        &self.phrases
    }

    pub fn abbreviations(&self) -> &[Rule] {
        &self.abbreviations
    }

    pub fn fillers(&self) -> &HashSet<&'static str> {
        &self.fillers
    }

    pub fn is_filler(&self, token: &str) -> bool {
        self.fillers.contains(token.to_lowercase().as_str())
    }

    pub fn secondary(&self) -> &[Rule] {
        &self.secondary
    }

    pub fn trailing(&self) -> &[Rule] {
        &self.trailing
    }
}

/// The built-in table, compiled once per process.
pub static STANDARD_TABLE: LazyLock<Arc<PatternTable>> = LazyLock::new(|| {
    Arc::new(PatternTable::standard().expect("built-in pattern table must compile"))
});
