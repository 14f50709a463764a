//! The page document: an ordered collection of blocks.
//!
//! Block order is display order. The document-level operations are the same
//! repeater operations the blocks use internally, so reordering whole
//! sections obeys the same boundary rules as reordering cards inside one.

use serde::{Deserialize, Serialize};

use crate::core::block::{
    ArticleItem, Block, BlockKind, CategoryCard, CtaButton, FaqItem, FooterLink, HoursCard,
    HoursRow, MenuItem, ResponseCard,
};
use crate::core::repeater::{self, RepeaterPolicy};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub blocks: Vec<Block>,
}

impl PageDocument {
    /// Append a default block of `kind` at the end of the page. Returns the
    /// index the block landed on.
    pub fn add_block(&mut self, kind: BlockKind) -> usize {
        let index = repeater::append(&mut self.blocks, kind.create());
        log::info!("Added {kind} block at position {index}");
        index
    }

    pub fn remove_block(&mut self, index: usize) -> bool {
        repeater::remove_at(&mut self.blocks, index, RepeaterPolicy::UNBOUNDED)
    }

    pub fn move_block_up(&mut self, index: usize) -> bool {
        repeater::move_up(&mut self.blocks, index)
    }

    pub fn move_block_down(&mut self, index: usize) -> bool {
        repeater::move_down(&mut self.blocks, index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Build a default block of `kind`, then let `fill` populate its records.
fn seeded(kind: BlockKind, fill: impl FnOnce(&mut Block)) -> Block {
    let mut block = kind.create();
    fill(&mut block);
    block
}

/// Seed document used when no page file exists yet: the help-center layout
/// the original theme ships, with plausible starter records.
pub fn starter_page() -> PageDocument {
    let mut page = PageDocument::default();

    page.blocks.push(Block::Header {
        site_title: "Help Center".to_string(),
        show_logo: true,
        menu_items: vec![
            MenuItem {
                label: "Home".to_string(),
                url: "/".to_string(),
            },
            MenuItem {
                label: "Guides".to_string(),
                url: "/guides".to_string(),
            },
            MenuItem {
                label: "Contact".to_string(),
                url: "/contact".to_string(),
            },
        ],
    });

    page.blocks.push(BlockKind::Hero.create());

    page.blocks.push(seeded(BlockKind::CategoryCards, |block| {
        if let Block::CategoryCards { cards, .. } = block {
            cards.push(CategoryCard {
                icon: "rocket".to_string(),
                title: "Getting Started".to_string(),
                description: "First steps and basic setup".to_string(),
                link: "/category/getting-started".to_string(),
            });
            cards.push(CategoryCard {
                icon: "calendar".to_string(),
                title: "Bookings".to_string(),
                description: "Creating and managing bookings".to_string(),
                link: "/category/bookings".to_string(),
            });
            cards.push(CategoryCard {
                icon: "credit-card".to_string(),
                title: "Billing".to_string(),
                description: "Invoices, payments and refunds".to_string(),
                link: "/category/billing".to_string(),
            });
        }
    }));

    page.blocks.push(seeded(BlockKind::PopularArticles, |block| {
        if let Block::PopularArticles { articles, .. } = block {
            articles.clear();
            articles.push(ArticleItem {
                title: "How to get started with your first booking".to_string(),
                description: "Learn the essential steps to create your first booking and configure basic settings.".to_string(),
                url: "/articles/first-booking".to_string(),
            });
            articles.push(ArticleItem {
                title: "Setting up availability and time slots".to_string(),
                description: "Configure your available hours, time slots, and booking restrictions.".to_string(),
                url: "/articles/availability".to_string(),
            });
        }
    }));

    page.blocks.push(seeded(BlockKind::Faq, |block| {
        if let Block::Faq { faqs, .. } = block {
            faqs.push(FaqItem {
                question: "How do I reset my password?".to_string(),
                answer:
                    "Use the reset link on the sign-in page and follow the email instructions."
                        .to_string(),
            });
            faqs.push(FaqItem {
                question: "Can I change my booking later?".to_string(),
                answer: "Yes, bookings can be rescheduled up to 24 hours before the start time."
                    .to_string(),
            });
            faqs.push(FaqItem {
                question: "Where do I find my invoices?".to_string(),
                answer: "Invoices are listed under Billing in your account settings.".to_string(),
            });
        }
    }));

    page.blocks.push(seeded(BlockKind::ResponseTimes, |block| {
        if let Block::ResponseTimes { cards, .. } = block {
            cards.push(ResponseCard {
                label: "Live Chat".to_string(),
                value: "< 2 hours".to_string(),
                description: "During business hours".to_string(),
            });
            cards.push(ResponseCard {
                label: "Email".to_string(),
                value: "< 1 day".to_string(),
                description: "Around the clock".to_string(),
            });
            cards.push(ResponseCard {
                label: "Phone".to_string(),
                value: "Immediate".to_string(),
                description: "Weekdays 9-17".to_string(),
            });
        }
    }));

    page.blocks.push(seeded(BlockKind::SupportHours, |block| {
        if let Block::SupportHours { cards, .. } = block {
            cards.push(HoursCard {
                title: "Chat & Email".to_string(),
                rows: vec![
                    HoursRow {
                        label: "Mon - Fri".to_string(),
                        hours: "08:00 - 20:00".to_string(),
                    },
                    HoursRow {
                        label: "Sat".to_string(),
                        hours: "10:00 - 16:00".to_string(),
                    },
                ],
            });
            cards.push(HoursCard {
                title: "Phone".to_string(),
                rows: vec![HoursRow {
                    label: "Mon - Fri".to_string(),
                    hours: "09:00 - 17:00".to_string(),
                }],
            });
        }
    }));

    page.blocks.push(seeded(BlockKind::NeedHelp, |block| {
        if let Block::NeedHelp { buttons, .. } = block {
            buttons.push(CtaButton {
                text: "Start a chat".to_string(),
                icon: "comment".to_string(),
                url: "/chat".to_string(),
                ..CtaButton::default()
            });
            buttons.push(CtaButton {
                text: "Send an email".to_string(),
                icon: "envelope".to_string(),
                url: "mailto:support@example.com".to_string(),
                bg_color: "#ffffff".to_string(),
                text_color: "#111827".to_string(),
                border: "1px solid #e5e7eb".to_string(),
                hover_bg_color: "#f8fafc".to_string(),
                hover_text_color: "#111827".to_string(),
                hover_border: "1px solid #d1d5db".to_string(),
            });
        }
    }));

    page.blocks.push(BlockKind::ContactForm.create());

    page.blocks.push(seeded(BlockKind::Footer, |block| {
        if let Block::Footer { links, .. } = block {
            links.push(FooterLink {
                text: "Privacy".to_string(),
            });
            links.push(FooterLink {
                text: "Terms".to_string(),
            });
        }
    }));

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_order_operations() {
        let mut page = PageDocument::default();
        page.add_block(BlockKind::Hero);
        page.add_block(BlockKind::Faq);
        page.add_block(BlockKind::Footer);
        assert_eq!(page.len(), 3);

        assert!(page.move_block_down(0));
        assert_eq!(page.blocks[0].kind(), BlockKind::Faq);
        assert_eq!(page.blocks[1].kind(), BlockKind::Hero);

        assert!(!page.move_block_up(0));
        assert!(!page.move_block_down(2));

        assert!(page.remove_block(1));
        assert_eq!(page.len(), 2);
        assert_eq!(page.blocks[1].kind(), BlockKind::Footer);
    }

    #[test]
    fn test_starter_page_has_full_layout() {
        let page = starter_page();
        assert!(page.len() >= 9);
        assert_eq!(
            page.blocks.first().map(|b| b.kind()),
            Some(BlockKind::Header)
        );
        assert_eq!(page.blocks.last().map(|b| b.kind()), Some(BlockKind::Footer));
        // the seeded FAQ is non-empty so the preview accordion has panels
        let faq = page
            .blocks
            .iter()
            .find(|b| b.kind() == BlockKind::Faq)
            .expect("starter page has a FAQ block");
        assert!(faq.items_len() >= 2);
    }
}
