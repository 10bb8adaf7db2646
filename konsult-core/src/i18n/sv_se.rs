//! 瑞典语翻译 (sv-SE)

use super::keys::{
    AboutTexts, CaptchaTexts, ContactFormTexts, ContactInfoTexts, ContactTexts, FeaturesTexts,
    HeroTexts, HintTexts, HomeTexts, NavTexts, ServicesTexts, SiteTexts, TitledText, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    site: SiteTexts {
        brand: "IT Konsult",
        footer: "© IT Konsult. Alla rättigheter förbehållna.",
    },

    nav: NavTexts {
        home: "Hem",
        services: "Tjänster",
        about: "Om mig",
        contact: "Kontakt",
        menu: "Meny",
    },

    home: HomeTexts {
        hero: HeroTexts {
            title: "IT-konsult med passion för innovation",
            subtitle: "Jag hjälper företag att bygga moderna, skalbara och effektiva IT-lösningar",
            cta: "Boka ett samtal",
            cta2: "Se mina tjänster",
        },
        features: FeaturesTexts {
            title: "Varför välja mig?",
            experience: TitledText {
                title: "Bred erfarenhet",
                body: "Många års erfarenhet av komplexa IT-projekt och moderna teknologier",
            },
            quality: TitledText {
                title: "Hög kvalitet",
                body: "Fokus på ren kod, bästa praxis och långsiktiga lösningar",
            },
            flexible: TitledText {
                title: "Flexibel",
                body: "Anpassar mig efter dina behov och arbetar både på plats och remote",
            },
        },
    },

    services: ServicesTexts {
        title: "Mina tjänster",
        subtitle: "Jag erbjuder ett brett utbud av IT-konsulttjänster",
        visare: TitledText {
            title: "Visare",
            body: "Avancerad visualiseringslösning för dataanalys och presentation. Perfekt för företag som behöver omvandla komplex data till tydliga insikter.",
        },
        mapongo: TitledText {
            title: "MapOnGo",
            body: "Innovativ kartbaserad applikation för navigering och platsbaserade tjänster. Idealisk för logistik och fältarbete.",
        },
        consulting: TitledText {
            title: "Konsulttjänster",
            body: "Skräddarsydda IT-konsulttjänster inom systemutveckling, arkitektur och teknisk rådgivning. Jag hjälper dig från idé till färdig lösning.",
        },
        cta: "Intresserad? Kontakta mig",
    },

    about: AboutTexts {
        title: "Om mig",
        intro: "Jag är en erfaren IT-konsult med passion för att skapa innovativa lösningar",
        bio: TitledText {
            title: "Bakgrund",
            body: "Med många års erfarenhet inom IT-branschen har jag arbetat med allt från små startups till stora företag. Min expertis spänner över systemutveckling, arkitektur och projektledning.",
        },
        experience: TitledText {
            title: "Erfarenhet",
            body: "Jag har levererat framgångsrika projekt inom olika branscher och har med teknologier som React, TypeScript, Node.js, Java och C#.",
        },
        approach: TitledText {
            title: "Min approach",
            body: "Jag tror på nära samarbete med kunder och behovsanalys som grund för kvalitet och långsiktighet.",
        },
    },

    contact: ContactTexts {
        title: "Kontakta mig",
        subtitle: "Har du ett projekt eller en idé? Hör av dig!",
        form: ContactFormTexts {
            name: "Namn",
            name_placeholder: "Ditt namn",
            email: "E-post",
            email_placeholder: "din@email.se",
            company: "Företag (frivilligt)",
            company_placeholder: "Ditt företag",
            message: "Meddelande",
            message_placeholder: "Berätta om ditt projekt eller din fråga...",
            submit: "Skicka meddelande",
            sending: "Skickar...",
            success: "Tack för ditt meddelande! Jag återkommer så snart som möjligt.",
            error: "Något gick fel. Vänligen försök igen.",
            required: "Fyll i det här fältet",
            invalid_email: "Ange en giltig e-postadress",
        },
        captcha: CaptchaTexts {
            label: "Jag är inte en robot",
            verified: "Verifierad",
        },
        info: ContactInfoTexts {
            title: "Kontaktinformation",
            email: "E-post",
            email_protected: "Lös CAPTCHA för att se e-postadress",
            location: "Plats",
            location_value: "Sverige",
        },
    },

    hints: HintTexts {
        navigate: "Navigera",
        open: "Öppna",
        switch_panel: "Byt panel",
        next_field: "Nästa fält",
        submit: "Skicka",
        captcha: "CAPTCHA",
        scroll: "Rulla",
        language: "Språk",
        menu: "Meny",
        help: "Hjälp",
        back: "Tillbaka",
        quit: "Avsluta",
        help_title: "Kortkommandon",
    },
};
