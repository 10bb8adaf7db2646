//! 英文翻译 (en-US)

use super::keys::{
    AboutTexts, CaptchaTexts, ContactFormTexts, ContactInfoTexts, ContactTexts, FeaturesTexts,
    HeroTexts, HintTexts, HomeTexts, NavTexts, ServicesTexts, SiteTexts, TitledText, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    site: SiteTexts {
        brand: "IT Konsult",
        footer: "© IT Konsult. All rights reserved.",
    },

    nav: NavTexts {
        home: "Home",
        services: "Services",
        about: "About",
        contact: "Contact",
        menu: "Menu",
    },

    home: HomeTexts {
        hero: HeroTexts {
            title: "IT Consultant with a passion for innovation",
            subtitle: "I help companies build modern, scalable and efficient IT solutions",
            cta: "Book a call",
            cta2: "View services",
        },
        features: FeaturesTexts {
            title: "Why choose me?",
            experience: TitledText {
                title: "Broad experience",
                body: "Many years of experience with complex IT projects and modern technologies",
            },
            quality: TitledText {
                title: "High quality",
                body: "Focus on clean code, best practices and long-term solutions",
            },
            flexible: TitledText {
                title: "Flexible",
                body: "I adapt to your needs and work both on-site and remotely",
            },
        },
    },

    services: ServicesTexts {
        title: "My Services",
        subtitle: "I offer a wide range of IT consulting services",
        visare: TitledText {
            title: "Visare",
            body: "Advanced visualization solution for data analysis and presentation. Perfect for companies that need to transform complex data into clear insights.",
        },
        mapongo: TitledText {
            title: "MapOnGo",
            body: "Innovative map-based application for navigation and location-based services. Ideal for logistics and field work.",
        },
        consulting: TitledText {
            title: "Consulting Services",
            body: "Tailored IT consulting services in system development, architecture and technical advisory. I help you from idea to finished solution.",
        },
        cta: "Interested? Contact me",
    },

    about: AboutTexts {
        title: "About Me",
        intro: "I am an experienced IT consultant with a passion for creating innovative solutions",
        bio: TitledText {
            title: "Background",
            body: "With many years of experience in the IT industry, I have worked with everything from small startups to large enterprises. My expertise spans system development, architecture and project management.",
        },
        experience: TitledText {
            title: "Experience",
            body: "I have delivered successful projects across various industries and have worked with technologies such as React, TypeScript, Node.js, Java and C#.",
        },
        approach: TitledText {
            title: "My approach",
            body: "I believe in close collaboration with clients and needs analysis as the foundation for quality and long-term sustainability.",
        },
    },

    contact: ContactTexts {
        title: "Contact Me",
        subtitle: "Have a project or an idea? Get in touch!",
        form: ContactFormTexts {
            name: "Name",
            name_placeholder: "Your name",
            email: "Email",
            email_placeholder: "your@email.com",
            company: "Company (optional)",
            company_placeholder: "Your company",
            message: "Message",
            message_placeholder: "Tell me about your project or question...",
            submit: "Send message",
            sending: "Sending...",
            success: "Thank you for your message! I will get back to you as soon as possible.",
            error: "Something went wrong. Please try again.",
            required: "Please fill out this field",
            invalid_email: "Please enter a valid email address",
        },
        captcha: CaptchaTexts {
            label: "I'm not a robot",
            verified: "Verified",
        },
        info: ContactInfoTexts {
            title: "Contact Information",
            email: "Email",
            email_protected: "Complete CAPTCHA to view email address",
            location: "Location",
            location_value: "Sweden",
        },
    },

    hints: HintTexts {
        navigate: "Navigate",
        open: "Open",
        switch_panel: "Switch panel",
        next_field: "Next field",
        submit: "Send",
        captcha: "CAPTCHA",
        scroll: "Scroll",
        language: "Language",
        menu: "Menu",
        help: "Help",
        back: "Back",
        quit: "Quit",
        help_title: "Keyboard shortcuts",
    },
};
