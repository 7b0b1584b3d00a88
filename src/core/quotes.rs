use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        quote: "Remember why you started no contact in the first place. It's for your healing and growth.",
        author: "Community wisdom",
    },
    Quote {
        quote: "Whenever you feel like reaching out, try to wait 24 hours first. The urge will often pass.",
        author: "Reddit user advice",
    },
    Quote {
        quote: "Your healing is more important than any closure you think you need from them.",
        author: "Support forum insight",
    },
    Quote {
        quote: "The person you're missing doesn't exist anymore. You're missing a memory.",
        author: "Healing perspective",
    },
    Quote {
        quote: "No contact isn't about them, it's about giving yourself the space to heal and grow.",
        author: "Recovery wisdom",
    },
    Quote {
        quote: "When you feel like texting them, text a friend instead who supports your journey.",
        author: "Practical advice",
    },
    Quote {
        quote: "The temporary relief of contact is not worth the restart of your healing journey.",
        author: "Recovery insight",
    },
];

/// Circular cursor over a non-empty quote list. Always starts at index 0.
#[derive(Debug, Clone)]
pub struct QuoteCarousel<'a> {
    quotes: &'a [Quote],
    index: usize,
}

impl Default for QuoteCarousel<'static> {
    fn default() -> Self {
        Self { quotes: QUOTES, index: 0 }
    }
}

impl<'a> QuoteCarousel<'a> {
    /// Returns `None` for an empty list.
    pub fn new(quotes: &'a [Quote]) -> Option<Self> {
        if quotes.is_empty() {
            None
        } else {
            Some(Self { quotes, index: 0 })
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn current(&self) -> &'a Quote {
        &self.quotes[self.index]
    }

    pub fn next(&mut self) -> &'a Quote {
        self.index = (self.index + 1) % self.quotes.len();
        self.current()
    }

    pub fn prev(&mut self) -> &'a Quote {
        let len = self.quotes.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }

    /// Same as calling `next` `n` times, in constant time.
    pub fn skip_forward(&mut self, n: usize) -> &'a Quote {
        let len = self.quotes.len();
        self.index = (self.index + n % len) % len;
        self.current()
    }

    /// Same as calling `prev` `n` times, in constant time.
    pub fn skip_back(&mut self, n: usize) -> &'a Quote {
        let len = self.quotes.len();
        self.index = (self.index + len - n % len) % len;
        self.current()
    }
}
