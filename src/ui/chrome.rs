/// Header, technology notes and footer around the demo panel
use chrono::Datelike;
use iced::widget::{button, column, horizontal_space, row, text};
use iced::{Alignment, Element};

use crate::Message;

pub fn header<'a>() -> Element<'a, Message> {
    row![
        text("StyleShift").size(28),
        horizontal_space(),
        button("Cart")
            .on_press(Message::OpenCart)
            .style(button::text),
        button("Sign In")
            .on_press(Message::SignIn)
            .padding([8, 16]),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

const ABOUT: &[(&str, &str)] = &[
    (
        "CycleGAN",
        "An advanced generative adversarial network that enables unpaired image-to-image \
translation, allowing products to be visualized in different styles without requiring \
paired training data.",
    ),
    (
        "FastAPI",
        "A high-performance Python web framework that would handle the backend processing of \
style transfer requests in a production environment.",
    ),
    (
        "Apache Cassandra",
        "A distributed NoSQL database used for storing style configurations, user preferences, \
and processed image metadata, enabling fast retrieval of style transfer results.",
    ),
];

pub fn about<'a>() -> Element<'a, Message> {
    let technologies = ABOUT.iter().fold(column![].spacing(8), |list, (name, blurb)| {
        list.push(text(format!("• {}: {}", name, blurb)).size(14))
    });

    column![
        text("About This Technology").size(20),
        text(
            "This application demonstrates how CycleGAN technology can enhance e-commerce \
experiences by allowing customers to visualize products in different artistic styles or \
environments."
        )
        .size(14),
        text("Key Technologies:").size(16),
        technologies,
        text(
            "In a full implementation, this system would process images in real-time or \
near-real-time, allowing shoppers to see products in various contexts, increasing engagement \
and reducing return rates by setting appropriate expectations."
        )
        .size(14),
    ]
    .spacing(12)
    .into()
}

pub fn footer<'a>() -> Element<'a, Message> {
    let year = chrono::Utc::now().year();

    row![
        text("StyleShift").size(16),
        horizontal_space(),
        text(format!("© {} StyleShift. All rights reserved.", year))
            .size(12)
            .style(text::secondary),
    ]
    .align_y(Alignment::Center)
    .into()
}
