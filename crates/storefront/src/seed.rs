//! Seed data for the sections that have no real backing service:
//! categories, the alerts activity feed, notifications, orders, wishlist,
//! chat, and referral stats.
//!
//! Records are created fresh per call; mutable sections get a session
//! working copy via [`crate::models::alerts::load_or_seed`].

use chrono::NaiveDate;
use essence_core::{
    NotificationId, NotificationKind, OrderId, OrderStatus, Price, ThreadId, WishlistItemId,
};

use crate::models::{ChatMessage, ChatThread, Notification, Order, ReferralStats, WishlistItem};

/// A curated storefront category. Static seed data, read-only.
#[derive(Debug, Clone)]
pub struct Category {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub subcategories: &'static [&'static str],
    pub item_count: u32,
}

/// The curated category grid for `/categories`.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            slug: "floral-fragrances",
            name: "Floral Fragrances",
            description: "Delicate floral scents that capture nature's essence",
            image: "https://images.unsplash.com/photo-1615368144592-5d7f1f7c6ab5?q=80&w=1000",
            subcategories: &["Rose", "Jasmine", "Lily", "Lavender", "Cherry Blossom"],
            item_count: 86,
        },
        Category {
            slug: "oriental-spicy",
            name: "Oriental & Spicy",
            description: "Rich and warm fragrances for memorable moments",
            image: "https://images.unsplash.com/photo-1619994403073-2cec844b8e63?q=80&w=1000",
            subcategories: &["Vanilla", "Amber", "Musk", "Oud", "Spices"],
            item_count: 64,
        },
        Category {
            slug: "fresh-citrus",
            name: "Fresh & Citrus",
            description: "Invigorating scents for a refreshing experience",
            image: "https://images.unsplash.com/photo-1527768175-41aa1771795f?q=80&w=1000",
            subcategories: &["Lemon", "Bergamot", "Ocean", "Green Tea", "Mint"],
            item_count: 72,
        },
        Category {
            slug: "luxury-collection",
            name: "Luxury Collection",
            description: "Exclusive fragrances for the distinguished",
            image: "https://images.unsplash.com/photo-1563170351-be82bc888aa4?q=80&w=1000",
            subcategories: &["Premium", "Limited Edition", "Signature", "Rare", "Exclusive"],
            item_count: 45,
        },
        Category {
            slug: "night-collection",
            name: "Night Collection",
            description: "Enchanting fragrances for the night",
            image: "https://images.unsplash.com/photo-1593743478057-f9fac59e06b6?q=80&w=1000",
            subcategories: &["Evening Wear", "Seductive", "Mysterious", "Dark Amber"],
            item_count: 58,
        },
        Category {
            slug: "natural-organic",
            name: "Natural & Organic",
            description: "Pure and sustainable fragrances from nature",
            image: "https://images.unsplash.com/photo-1616166330003-8e4b5338b9c7?q=80&w=1000",
            subcategories: &["Essential Oils", "Vegan", "Sustainable", "Pure", "Botanical"],
            item_count: 39,
        },
    ]
}

/// Look up a seed category by slug.
#[must_use]
pub fn category_by_slug(slug: &str) -> Option<Category> {
    categories().into_iter().find(|c| c.slug == slug)
}

/// The alerts-hub recent-activity feed.
#[must_use]
pub fn activity_feed() -> Vec<Notification> {
    vec![
        Notification {
            id: NotificationId::new(1),
            kind: NotificationKind::Message,
            title: "New Message from John".to_string(),
            message: "Hey, I have a question about the product...".to_string(),
            time: "2 minutes ago".to_string(),
            read: false,
        },
        Notification {
            id: NotificationId::new(2),
            kind: NotificationKind::Order,
            title: "Order #12345 Shipped".to_string(),
            message: "Your order has been shipped via DHL".to_string(),
            time: "1 hour ago".to_string(),
            read: false,
        },
        Notification {
            id: NotificationId::new(3),
            kind: NotificationKind::Promotion,
            title: "Price Drop Alert".to_string(),
            message: "Items in your wishlist are on sale!".to_string(),
            time: "2 hours ago".to_string(),
            read: false,
        },
        Notification {
            id: NotificationId::new(4),
            kind: NotificationKind::Wishlist,
            title: "Item Back in Stock".to_string(),
            message: "The Nike Air Max is now available".to_string(),
            time: "3 hours ago".to_string(),
            read: false,
        },
    ]
}

/// The notifications page list.
#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: NotificationId::new(1),
            kind: NotificationKind::Message,
            title: "New Message".to_string(),
            message: "You have received a new message from John Doe".to_string(),
            time: "2 minutes ago".to_string(),
            read: false,
        },
        Notification {
            id: NotificationId::new(2),
            kind: NotificationKind::Order,
            title: "Order Confirmed".to_string(),
            message: "Order #12345 has been confirmed and is being processed".to_string(),
            time: "1 hour ago".to_string(),
            read: false,
        },
        Notification {
            id: NotificationId::new(3),
            kind: NotificationKind::Wishlist,
            title: "Item Back in Stock".to_string(),
            message: "An item from your wishlist is now available".to_string(),
            time: "2 hours ago".to_string(),
            read: true,
        },
    ]
}

/// The seller's order history.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("#ORD001"),
            customer: "John Doe".to_string(),
            date: date(2024, 1, 15),
            total: Price::from_cents(299_99),
            status: OrderStatus::Completed,
            items: vec!["Premium Perfume".to_string(), "Body Spray".to_string()],
            payment_method: "Credit Card".to_string(),
            shipping_address: "123 Main St, City, Country".to_string(),
        },
        Order {
            id: OrderId::new("#ORD002"),
            customer: "Sarah Smith".to_string(),
            date: date(2024, 1, 18),
            total: Price::from_cents(89_50),
            status: OrderStatus::Processing,
            items: vec!["Citrus Dawn".to_string()],
            payment_method: "PayPal".to_string(),
            shipping_address: "45 Rose Ave, Town, Country".to_string(),
        },
        Order {
            id: OrderId::new("#ORD003"),
            customer: "Alex Johnson".to_string(),
            date: date(2024, 1, 21),
            total: Price::from_cents(154_25),
            status: OrderStatus::Pending,
            items: vec!["Amber Noir".to_string(), "Velvet Rose".to_string()],
            payment_method: "Credit Card".to_string(),
            shipping_address: "9 Hill Rd, Village, Country".to_string(),
        },
        Order {
            id: OrderId::new("#ORD004"),
            customer: "Maria Garcia".to_string(),
            date: date(2024, 1, 10),
            total: Price::from_cents(42_00),
            status: OrderStatus::Cancelled,
            items: vec!["Ocean Mist".to_string()],
            payment_method: "Gift Card".to_string(),
            shipping_address: "7 Lake View, City, Country".to_string(),
        },
    ]
}

/// The wishlist page items.
#[must_use]
pub fn wishlist() -> Vec<WishlistItem> {
    vec![
        WishlistItem {
            id: WishlistItemId::new(1),
            name: "Premium Leather Wallet".to_string(),
            price: Price::from_cents(79_99),
            image: "https://images.unsplash.com/photo-1627123424574-724758594e93?w=800".to_string(),
            rating: 4.5,
            in_stock: true,
            category: "Accessories".to_string(),
        },
        WishlistItem {
            id: WishlistItemId::new(2),
            name: "Wireless Headphones".to_string(),
            price: Price::from_cents(199_99),
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800".to_string(),
            rating: 4.8,
            in_stock: true,
            category: "Electronics".to_string(),
        },
        WishlistItem {
            id: WishlistItemId::new(3),
            name: "Smart Watch Series 5".to_string(),
            price: Price::from_cents(299_99),
            image: "https://images.unsplash.com/photo-1546868871-7041f2a55e12?w=800".to_string(),
            rating: 4.7,
            in_stock: false,
            category: "Electronics".to_string(),
        },
    ]
}

/// Chat conversation list.
#[must_use]
pub fn chat_threads() -> Vec<ChatThread> {
    vec![
        ChatThread {
            id: ThreadId::new(1),
            name: "John Doe".to_string(),
            preview: "Hey, is the leather wallet still available?".to_string(),
            time: "2m ago".to_string(),
            unread: 2,
            online: true,
            avatar: "https://ui-avatars.com/api/?name=John+Doe&background=0D8ABC&color=fff"
                .to_string(),
        },
        ChatThread {
            id: ThreadId::new(2),
            name: "Sarah Smith".to_string(),
            preview: "Thanks for the quick delivery!".to_string(),
            time: "1h ago".to_string(),
            unread: 0,
            online: true,
            avatar: "https://ui-avatars.com/api/?name=Sarah+Smith&background=FF69B4&color=fff"
                .to_string(),
        },
        ChatThread {
            id: ThreadId::new(3),
            name: "Alex Johnson".to_string(),
            preview: "Can you do a bundle discount?".to_string(),
            time: "3h ago".to_string(),
            unread: 4,
            online: false,
            avatar: "https://ui-avatars.com/api/?name=Alex+Johnson&background=4CAF50&color=fff"
                .to_string(),
        },
    ]
}

/// Look up a chat thread by id.
#[must_use]
pub fn chat_thread(id: ThreadId) -> Option<ChatThread> {
    chat_threads().into_iter().find(|t| t.id == id)
}

/// Seed messages for one chat thread.
#[must_use]
pub fn chat_messages(id: ThreadId) -> Vec<ChatMessage> {
    let opener = match id.as_u64() {
        1 => "Hey, is the leather wallet still available?",
        2 => "Thanks for the quick delivery!",
        3 => "Can you do a bundle discount?",
        _ => "Hi there!",
    };

    vec![
        ChatMessage {
            outgoing: false,
            body: opener.to_string(),
            time: "10:02".to_string(),
        },
        ChatMessage {
            outgoing: true,
            body: "Hi! Yes, happy to help.".to_string(),
            time: "10:05".to_string(),
        },
    ]
}

/// Referral program stats.
#[must_use]
pub fn referral_stats() -> ReferralStats {
    ReferralStats {
        total_referrals: 12,
        rewards_earned: Price::from_cents(240_00),
        code: "ESSENCE-AMY-2024".to_string(),
    }
}

/// Share channels offered on the referral page.
#[must_use]
pub const fn referral_channels() -> &'static [&'static str] {
    &["WhatsApp", "Twitter", "Facebook", "Email"]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
