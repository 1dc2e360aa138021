//! Business knowledge base: the content the assistant answers from and the
//! service catalogue the sitemap enumerates.

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SprintPackage {
    pub name: &'static str,
    pub price: &'static str,
    pub timeline: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ManagedPackage {
    pub name: &'static str,
    pub setup_fee: &'static str,
    pub monthly_fee: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AssistantPackage {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const SITE_NAME: &str = "Bright Loop Media";

pub const TAGLINE: &str = "We build websites that bring you enquiries. Fixed price. No waffle.";

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Chris Ilabaca",
        role: "Operations and Strategy, HelloFlint builder",
    },
    TeamMember {
        name: "Matthew Murphy",
        role: "Technical Delivery",
    },
];

pub const TRUST_SIGNALS: &[&str] = &[
    "Fixed Price",
    "5 Days fastest delivery",
    "UK Based (Wirral)",
    "Trusted by small businesses across Merseyside and the UK",
];

pub const SERVICES: &[Service] = &[
    Service {
        id: "websites",
        title: "Websites That Convert",
        description: "Fast, mobile first websites built to turn visitors into enquiries.",
    },
    Service {
        id: "enqs",
        title: "Enquiry Handling",
        description: "Smart enquiry routing, FAQ driven chat, and structured follow up.",
    },
    Service {
        id: "booking",
        title: "Booking and Scheduling",
        description: "Smoother booking journeys with automated confirmations and reminders.",
    },
    Service {
        id: "automations",
        title: "Automations",
        description: "Practical systems for follow up emails, client onboarding, and repetitive admin tasks.",
    },
    Service {
        id: "ai-consultancy",
        title: "AI Consultancy",
        description: "Honest, plain English guidance on where AI can genuinely help your business.",
    },
    Service {
        id: "google",
        title: "Google Presence",
        description: "Google Business Profile setup, local SEO basics, and visibility improvements.",
    },
    Service {
        id: "helloflint",
        title: "AI Assistants (HelloFlint)",
        description: "AI assistants trained on your business. Available 24/7. Built on Claude by Anthropic.",
    },
];

pub const STANDARD_SPRINTS: &[SprintPackage] = &[
    SprintPackage {
        name: "One Page Sprint",
        price: "£795",
        timeline: "5 working days",
        features: &[
            "Mobile first build",
            "Conversion copywriting",
            "Basic SEO",
            "Contact form",
        ],
    },
    SprintPackage {
        name: "Five Page Sprint",
        price: "£1,495",
        timeline: "8 working days",
        features: &[
            "Home, Services, About, Gallery, Contact",
            "Lead capture",
            "Analytics",
            "SEO",
        ],
    },
    SprintPackage {
        name: "Growth Sprint",
        price: "£2,495",
        timeline: "10 working days",
        features: &[
            "Five pages",
            "Email follow up automation",
            "CRM pipeline",
            "Local SEO",
            "Two landing pages",
        ],
    },
];

pub const MANAGED_SPRINTS: &[ManagedPackage] = &[
    ManagedPackage {
        name: "Bronze",
        setup_fee: "£295 setup",
        monthly_fee: "£56 monthly",
        description: "Up to 3 pages",
    },
    ManagedPackage {
        name: "Silver",
        setup_fee: "£495 setup",
        monthly_fee: "£96 monthly",
        description: "Up to 6 pages",
    },
    ManagedPackage {
        name: "Gold",
        setup_fee: "£695 setup",
        monthly_fee: "£176 monthly",
        description: "Up to 10 pages",
    },
    ManagedPackage {
        name: "Platinum",
        setup_fee: "£995 setup",
        monthly_fee: "£286 monthly",
        description: "Bespoke",
    },
    ManagedPackage {
        name: "Enterprise",
        setup_fee: "From £1,500 setup",
        monthly_fee: "From £454 monthly",
        description: "Bespoke",
    },
];

pub const HELLOFLINT_PACKAGES: &[AssistantPackage] = &[
    AssistantPackage {
        name: "Starter",
        price: "£750",
        description: "One assistant, one channel, 3 core workflows.",
    },
    AssistantPackage {
        name: "Professional",
        price: "£1,250",
        description: "Multiple channels, 8 workflows, lead qualification.",
    },
    AssistantPackage {
        name: "Enterprise",
        price: "£2,000+",
        description: "Unlimited workflows, complex integrations.",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does pricing work?",
        answer: "One off setup fee covering planning, build, and launch. Optional monthly support or a one off buyout to self host.",
    },
    Faq {
        question: "Do I own my website?",
        answer: "Yes. You own the content. Buyout option available for full site files.",
    },
    Faq {
        question: "Can I cancel?",
        answer: "Yes. Monthly, no lock in, 30 days notice.",
    },
    Faq {
        question: "What do you need to start?",
        answer: "Logo, business details, service info, photos. Onboarding form sent after deposit.",
    },
];
