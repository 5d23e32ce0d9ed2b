//! Static site configuration: company details, contacts, navigation and the
//! texts of the informational pages. Mirrors what a CMS would provide.

use once_cell::sync::Lazy;

pub struct Company {
    pub name: &'static str,
    pub slogan: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
}

pub struct Contacts {
    pub phone: &'static str,
    pub phone_raw: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub city: &'static str,
}

pub struct Delivery {
    pub currency: &'static str,
    pub delivery_time: &'static str,
    pub description: &'static str,
    pub terms: Vec<&'static str>,
}

pub struct PaymentMethod {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct About {
    pub title: &'static str,
    pub intro: &'static str,
    pub features: Vec<Feature>,
    pub advantages: Vec<&'static str>,
}

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub struct Catalog {
    pub default_category: &'static str,
    pub no_photo_placeholder: &'static str,
}

pub struct Messages {
    pub empty_cart: &'static str,
    pub add_to_cart: &'static str,
    pub checkout: &'static str,
    pub no_products: &'static str,
    pub loading: &'static str,
}

pub struct SiteConfig {
    pub company: Company,
    pub contacts: Contacts,
    pub delivery: Delivery,
    pub payment_methods: Vec<PaymentMethod>,
    pub about: About,
    pub delivery_methods: Vec<Feature>,
    pub navigation: Vec<NavLink>,
    pub catalog: Catalog,
    pub messages: Messages,
}

pub static SITE: Lazy<SiteConfig> = Lazy::new(|| SiteConfig {
    company: Company {
        name: "Paida All",
        slogan: "Оптовые поставки",
        description: "Оптовые поставки товаров в Караганде. Работаем с физическими и юридическими лицами.",
        logo: "https://pic.maxiol.com/thumbs2/1753306101.86132844.paidaj.jpg",
    },
    contacts: Contacts {
        phone: "+7 (778) 085-54-78",
        phone_raw: "+77780855478",
        whatsapp: "77780855478",
        email: "paidaall.kz@gmail.com",
        address: "г. Караганда",
        city: "Караганда",
    },
    delivery: Delivery {
        currency: "₸",
        delivery_time: "1-3 рабочих дня",
        description: "Доставка по Казахстану осуществляется транспортными компаниями или InDriver",
        terms: vec![
            "Отправка транспортными компаниями",
            "Доставка через InDriver",
            "Самовывоз со склада в Караганде",
            "Срок доставки: 1-3 рабочих дня",
        ],
    },
    payment_methods: vec![
        PaymentMethod {
            name: "Kaspi перевод",
            icon: "smartphone",
            description: "Перевод на Kaspi.",
        },
        PaymentMethod {
            name: "Безналичный расчёт",
            icon: "building",
            description: "Для юридических лиц. Оплата по счёту.",
        },
    ],
    about: About {
        title: "О компании",
        intro: "Paida All — надёжный партнёр в сфере оптовых поставок товаров. Мы работаем как с физическими, так и с юридическими лицами, предлагая широкий ассортимент продукции по конкурентным ценам.",
        features: vec![
            Feature {
                title: "Опыт работы",
                description: "Многолетний опыт в сфере оптовой торговли позволяет нам предлагать лучшие условия для наших клиентов.",
            },
            Feature {
                title: "Клиенты",
                description: "Работаем с розничными магазинами, ИП и т.д.",
            },
            Feature {
                title: "Качество",
                description: "Гарантируем подлинность и качество всей продукции.",
            },
        ],
        advantages: vec![
            "Широкий ассортимент — более 2000 наименований",
            "Конкурентные оптовые цены",
            "Удобные способы оплаты",
            "Индивидуальный подход к каждому клиенту",
        ],
    },
    delivery_methods: vec![
        Feature {
            title: "Доставка по Казахстану",
            description: "Отправка осуществляется транспортными компаниями или InDriver",
        },
        Feature {
            title: "Самовывоз",
            description: "Бесплатный самовывоз со склада.",
        },
        Feature {
            title: "Сроки доставки",
            description: "1-3 рабочих дня. Точное время согласовывается с менеджером.",
        },
    ],
    navigation: vec![
        NavLink {
            name: "Оплата",
            href: "/payment",
        },
        NavLink {
            name: "Доставка",
            href: "/delivery",
        },
        NavLink {
            name: "Контакты",
            href: "/contacts",
        },
        NavLink {
            name: "О компании",
            href: "/about",
        },
    ],
    catalog: Catalog {
        default_category: "Все товары",
        no_photo_placeholder: "/placeholder.svg",
    },
    messages: Messages {
        empty_cart: "Ваша корзина пуста",
        add_to_cart: "В корзину",
        checkout: "Оформить в WhatsApp",
        no_products: "Товары не найдены",
        loading: "Загрузка...",
    },
});

/// Цена по-русски: разряды через неразрывный пробел, дробная часть через
/// запятую. `None` — цена не указана.
pub fn format_price(price: Option<f64>) -> String {
    let Some(value) = price else {
        return "Цена не указана".to_string();
    };
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut amount = String::new();
    if negative {
        amount.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            amount.push('\u{a0}');
        }
        amount.push(ch);
    }
    let fraction = cents % 100;
    if fraction != 0 {
        let decimals = format!("{fraction:02}");
        amount.push(',');
        amount.push_str(decimals.trim_end_matches('0'));
    }
    format!("{} {}", amount, SITE.delivery.currency)
}

pub fn phone_link() -> String {
    format!("tel:{}", SITE.contacts.phone_raw)
}

/// Deep link opening a WhatsApp chat with the message prefilled.
pub fn whatsapp_link(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        SITE.contacts.whatsapp,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_grouped_prices() {
        assert_eq!(format_price(Some(200.0)), "200 ₸");
        assert_eq!(format_price(Some(1500.0)), "1\u{a0}500 ₸");
        assert_eq!(format_price(Some(1234567.0)), "1\u{a0}234\u{a0}567 ₸");
        assert_eq!(format_price(Some(0.0)), "0 ₸");
    }

    #[test]
    fn formats_fractional_prices_with_comma() {
        assert_eq!(format_price(Some(99.5)), "99,5 ₸");
    }

    #[test]
    fn missing_price_has_its_own_label() {
        assert_eq!(format_price(None), "Цена не указана");
    }

    #[test]
    fn whatsapp_link_urlencodes_the_message() {
        let link = whatsapp_link("Здравствуйте!");
        assert!(link.starts_with("https://wa.me/77780855478?text="));
        assert!(!link.contains(' '));
    }
}
