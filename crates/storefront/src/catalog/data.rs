//! Static catalog data.
//!
//! Prices are in USD. Accessory kinds are assigned here explicitly; products
//! whose id names no chair, desk, controller or headset fall under
//! [`AccessoryKind::PcAccessories`].

use game_store_core::{AccessoryKind, Category, Platform};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One static catalog record.
pub(crate) struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Decimal,
    pub category: Category,
    pub platform: Platform,
    pub image: &'static str,
    pub description: Option<&'static str>,
    pub accessory_kind: Option<AccessoryKind>,
}

/// The full product list, in display order.
pub(crate) const ENTRIES: &[CatalogEntry] = &[
    // PlayStation consoles
    CatalogEntry {
        id: "ps5console",
        name: "PlayStation 5 Console",
        price: dec!(499.99),
        category: Category::Console,
        platform: Platform::Playstation,
        image: "/images/ps5.png",
        description: Some("Experience lightning-fast loading with an ultra-high speed SSD, deeper immersion with support for haptic feedback, adaptive triggers, and 3D Audio."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "ps5digitial",
        name: "PlayStation 5 Digital Edition",
        price: dec!(399.99),
        category: Category::Console,
        platform: Platform::Playstation,
        image: "/playstation/psc11.png",
        description: Some("The PS5 Digital Edition boasts the same powerful features as the regular PS5 but without a disc drive."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "ps5slimdig",
        name: "PlayStation 5 Slim Digital Console",
        price: dec!(584.99),
        category: Category::Console,
        platform: Platform::Playstation,
        image: "/playstation/slim.png",
        description: Some("The sleek new digital edition PS5 with reduced size and improved efficiency."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "ps5discastro",
        name: "PlayStation 5 Disc Console + Astro Bot",
        price: dec!(644.99),
        category: Category::Console,
        platform: Platform::Playstation,
        image: "/playstation/pc2.png",
        description: Some("PS5 disc console bundled with the delightful Astro Bot game."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "ps5slimac",
        name: "PlayStation 5 Slim Console + Assassins Creed Shadows Special Edition Bundle",
        price: dec!(749.99),
        category: Category::Console,
        platform: Platform::Playstation,
        image: "/playstation/psc3.png",
        description: Some("PS5 Slim bundled with the special edition of Assassin's Creed Shadows."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "ps5pro",
        name: "PlayStation 5 Pro Console",
        price: dec!(1049.99),
        category: Category::Console,
        platform: Platform::Playstation,
        image: "/playstation/psc4.png",
        description: Some("The most powerful PlayStation console ever with enhanced graphics and performance."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "ps5slimdisc",
        name: "PlayStation 5 Slim Disc Console",
        price: dec!(719.99),
        category: Category::Console,
        platform: Platform::Playstation,
        image: "/playstation/psc4.png",
        description: Some("The new slim version of the PS5 with disc drive included."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "ps5witcher",
        name: "PlayStation 5 Slim Console + FREE The Witcher Complete Edition Bundle",
        price: dec!(749.99),
        category: Category::Console,
        platform: Platform::Playstation,
        image: "/playstation/psc5.png",
        description: Some("PS5 Slim bundled with the complete Witcher game collection."),
        accessory_kind: None,
    },

    // PlayStation games
    CatalogEntry {
        id: "capre2",
        name: "Resident Evil 2 Remake",
        price: dec!(37.49),
        category: Category::Games,
        platform: Platform::Playstation,
        image: "/playstation/resident1.png",
        description: Some("Return to Raccoon City in this stunning remake of the survival horror classic."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "capre3",
        name: "Resident Evil 3 Remake",
        price: dec!(37.49),
        category: Category::Games,
        platform: Platform::Playstation,
        image: "/playstation/resident3.png",
        description: Some("Experience Jill Valentine's desperate escape from Raccoon City in this thrilling remake."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "eafc25",
        name: "EA SPORTS FC™ 25",
        price: dec!(71.99),
        category: Category::Games,
        platform: Platform::Playstation,
        image: "/playstation/fc25.png",
        description: Some("The next evolution of football gaming with hyper-realistic gameplay and next-gen graphics."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "indycircle",
        name: "Indiana Jones and the Great Circle",
        price: dec!(101.99),
        category: Category::Games,
        platform: Platform::Playstation,
        image: "/playstation/in.png",
        description: Some("Embark on a globe-trotting adventure as the legendary archaeologist in this action-packed game."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "alonedark",
        name: "Alone In The Dark",
        price: dec!(31.49),
        category: Category::Games,
        platform: Platform::Playstation,
        image: "/playstation/aloneindark.png",
        description: Some("A reimagining of the survival horror classic with modern gameplay and visuals."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "unknown9",
        name: "Unknown 9: Awakening",
        price: dec!(22.50),
        category: Category::Games,
        platform: Platform::Playstation,
        image: "/playstation/silent.png",
        description: Some("Uncover hidden truths in this mysterious action-adventure game with supernatural elements."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "tlou2rem",
        name: "The Last of Us Part II Remastered",
        price: dec!(64.49),
        category: Category::Games,
        platform: Platform::Playstation,
        image: "/playstation/lastofus.png",
        description: Some("Enhanced version of the acclaimed post-apocalyptic adventure with improved visuals and new content."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "topspin25",
        name: "TopSpin 2K25",
        price: dec!(9.00),
        category: Category::Games,
        platform: Platform::Playstation,
        image: "/playstation/topspin.png",
        description: Some("The tennis franchise returns with legendary players and competitive gameplay modes."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "warhammer40k",
        name: "Warhammer 40,000: Space Marine 2",
        price: dec!(89.99),
        category: Category::Games,
        platform: Platform::Playstation,
        image: "/playstation/warharmers.png",
        description: Some("Battle hordes of aliens in this action-packed third-person shooter set in the Warhammer universe."),
        accessory_kind: None,
    },

    // PlayStation accessories
    CatalogEntry {
        id: "venomdock",
        name: "Docking Station For PS Portal",
        price: dec!(29.99),
        category: Category::Accessories,
        platform: Platform::Playstation,
        image: "/playstation/dock.png",
        description: Some("Convenient docking station for your PlayStation Portal device."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "wdsn850p",
        name: "WD_BLACK SN850P NVMe SSD for PS5 - 1TB",
        price: dec!(187.49),
        category: Category::Accessories,
        platform: Platform::Playstation,
        image: "/playstation/wd.png",
        description: Some("High-performance SSD expansion for your PS5 console."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "dsmidnight",
        name: "DualSense Edge Wireless Controller – Midnight Black",
        price: dec!(299.99),
        category: Category::Accessories,
        platform: Platform::Playstation,
        image: "/playstation/controller.png",
        description: Some("Premium customizable controller with advanced features and sleek black design."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "pulseelite",
        name: "PULSE Elite Wireless Headset – Midnight Black",
        price: dec!(194.99),
        category: Category::Accessories,
        platform: Platform::Playstation,
        image: "/playstation/wireless.png",
        description: Some("High-fidelity wireless headset with noise cancellation and immersive audio."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "pulseexplore",
        name: "PULSE Explore Wireless Earbuds – Midnight Black",
        price: dec!(299.99),
        category: Category::Accessories,
        platform: Platform::Playstation,
        image: "/playstation/earbuds.png",
        description: Some("Premium wireless earbuds with lossless audio and sleek design."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "gioteckvx4",
        name: "Gioteck VX-4+ Wired RGB PS4 Controller - Camo",
        price: dec!(18.75),
        category: Category::Accessories,
        platform: Platform::Playstation,
        image: "/playstation/giatck.png",
        description: Some("Affordable wired controller with RGB lighting and camouflage design."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "powerachargeuk",
        name: "Twin Charging Station for DualSense Wireless Controllers (UK Plug)",
        price: dec!(29.99),
        category: Category::Accessories,
        platform: Platform::Playstation,
        image: "/playstation/twin.png",
        description: Some("Official licensed twin charging station for DualSense controllers with UK plug."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },

    // PlayStation digital
    CatalogEntry {
        id: "psngift20",
        name: "£20 PlayStation Gift Card",
        price: dec!(30.00),
        category: Category::Digital,
        platform: Platform::Playstation,
        image: "/playstation/pd2.png",
        description: Some("Redeem for games, DLC, subscriptions and more on PlayStation Store."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "psngift50",
        name: "£50 PlayStation Gift Card",
        price: dec!(75.00),
        category: Category::Digital,
        platform: Platform::Playstation,
        image: "/playstation/pd3.png",
        description: Some("Redeem for games, DLC, subscriptions and more on PlayStation Store."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "psngift100",
        name: "£100 PlayStation Gift Card",
        price: dec!(150.00),
        category: Category::Digital,
        platform: Platform::Playstation,
        image: "/playstation/pd4.png",
        description: Some("Redeem for games, DLC, subscriptions and more on PlayStation Store."),
        accessory_kind: None,
    },

    // Xbox consoles
    CatalogEntry {
        id: "xbox-series-x",
        name: "Xbox Series s Console",
        price: dec!(499.99),
        category: Category::Console,
        platform: Platform::Xbox,
        image: "/xbox/seriess.png",
        description: Some("The most powerful Xbox ever with 12 teraflops of raw graphic processing power."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "xbox-series-s-white",
        name: "Xbox Series S 512GB White - 2024 Packaging",
        price: dec!(374.99),
        category: Category::Console,
        platform: Platform::Xbox,
        image: "/xbox/seriess.png",
        description: Some("Next-gen performance in the smallest Xbox console. Perfect for all-digital gaming."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "gamepass-core-12",
        name: "Xbox Game Pass Core - 12 Month Membership",
        price: dec!(83.99),
        category: Category::Console,
        platform: Platform::Xbox,
        image: "/xbox/12.png",
        description: Some("Access to online multiplayer gaming and a collection of over 25 high-quality games."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "gamepass-core-3",
        name: "Xbox Game Pass Core - 3 Month Membership",
        price: dec!(26.99),
        category: Category::Console,
        platform: Platform::Xbox,
        image: "/xbox/3.png",
        description: Some("Access to online multiplayer gaming."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "gamepass-core-6",
        name: "Xbox Game Pass Core - 6 Month Membership",
        price: dec!(44.99),
        category: Category::Console,
        platform: Platform::Xbox,
        image: "/xbox/6.png",
        description: Some("Access to online multiplayer gaming."),
        accessory_kind: None,
    },

    // Xbox games
    CatalogEntry {
        id: "star-wars-outlaws",
        name: "Star Wars Outlaws - Special Edition",
        price: dec!(58.50),
        category: Category::Games,
        platform: Platform::Xbox,
        image: "/xbox/starwars.png",
        description: Some("Experience the first open-world Star Wars game set between Empire Strikes Back and Return of the Jedi."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "lords",
        name: "Lords Of The Fallen",
        price: dec!(9.99),
        category: Category::Games,
        platform: Platform::Xbox,
        image: "/xbox/lords.png",
        description: Some("."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "2k25",
        name: "PGA Tour 2K25",
        price: dec!(85.49),
        category: Category::Games,
        platform: Platform::Xbox,
        image: "/xbox/2k255.png",
        description: Some("."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "assassins-creed-shadows",
        name: "Assassins Creed Shadows Special Edition",
        price: dec!(97.49),
        category: Category::Games,
        platform: Platform::Xbox,
        image: "/xbox/ass.png",
        description: Some("Explore feudal Japan in this latest installment of the acclaimed Assassin's Creed series."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "starship-troopers",
        name: "Starship Troopers",
        price: dec!(21.00),
        category: Category::Games,
        platform: Platform::Xbox,
        image: "/xbox/startship.png",
        description: Some("Product code: 384386. Battle alien bugs in this action-packed shooter based on the classic film."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "witcher3-complete",
        name: "The Witcher 3: Wild Hunt - Complete Edition",
        price: dec!(6.00),
        category: Category::Games,
        platform: Platform::Xbox,
        image: "/xbox/which.png",
        description: Some("Play as a monster slayer in this award-winning RPG with all DLC included."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "cod-modern-warfare3",
        name: "Call of Duty: Modern Warfare III",
        price: dec!(15.00),
        category: Category::Games,
        platform: Platform::Xbox,
        image: "/xbox/cod.png",
        description: Some("The latest installment in the iconic Call of Duty franchise with intense multiplayer action."),
        accessory_kind: None,
    },

    // Xbox accessories
    CatalogEntry {
        id: "afterglow-controller",
        name: "Afterglow wave Xbox controller",
        price: dec!(45.00),
        category: Category::Accessories,
        platform: Platform::Xbox,
        image: "/xbox/glow.png.png",
        description: Some("Vibrant translucent design with customizable lighting and responsive buttons."),
        accessory_kind: Some(AccessoryKind::Controllers),
    },
    CatalogEntry {
        id: "controller",
        name: "PowerA Advantage Wired Controller for Xbox Series X|S - Warriors Nirvana",
        price: dec!(25.49),
        category: Category::Accessories,
        platform: Platform::Xbox,
        image: "/xbox/nivrana.png",
        description: None,
        accessory_kind: Some(AccessoryKind::Controllers),
    },
    CatalogEntry {
        id: "stealth-battery-pack",
        name: "High Capacity Rechargeable Battery Twin Pack - black",
        price: dec!(29.99),
        category: Category::Accessories,
        platform: Platform::Xbox,
        image: "/xbox/stealth.png",
        description: Some("Never run out of power with this twin pack of high-capacity rechargeable batteries."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "turtle-beach-headset-white",
        name: "Stealth 600 Gen 3 Headset for Xbox PS5 PS4 & PC - White",
        price: dec!(149.99),
        category: Category::Accessories,
        platform: Platform::Xbox,
        image: "/xbox/turtule.png",
        description: Some("Product code: 988547. Premium wireless gaming headset with 50mm speakers and noise-cancelling mic."),
        accessory_kind: Some(AccessoryKind::Headsets),
    },
    CatalogEntry {
        id: "powera-wired-controller",
        name: "Xbox Series X|S Wired Controller - Black",
        price: dec!(37.49),
        category: Category::Accessories,
        platform: Platform::Xbox,
        image: "/xbox/powera.png",
        description: Some("Officially licensed wired controller with customizable buttons and ergonomic design."),
        accessory_kind: Some(AccessoryKind::Controllers),
    },
    CatalogEntry {
        id: "powera",
        name: "PowerA charging Station for PlayStation Portal",
        price: dec!(44.99),
        category: Category::Accessories,
        platform: Platform::Xbox,
        image: "/xbox/portal.png",
        description: Some("Officially licensed wired controller with customizable buttons and ergonomic design."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },

    // Nintendo consoles
    CatalogEntry {
        id: "switch-oled-white-mk8",
        name: "Nintendo Switch - White OLED + Mario Kart 8 Deluxe Bundle",
        price: dec!(494.99),
        category: Category::Console,
        platform: Platform::Nintendo,
        image: "/nintendo/switchwhite.png",
        description: Some("Includes OLED Model Switch (7\" screen) and Mario Kart 8 Deluxe game. Perfect bundle for multiplayer fun."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "switch-oled-mario-nso",
        name: "Nintendo Switch (OLED) + Mario Wonder + 12 Months NSO",
        price: dec!(449.99),
        category: Category::Console,
        platform: Platform::Nintendo,
        image: "/nintendo/nintendo.png",
        description: Some("Premium bundle with OLED Switch, Super Mario Bros. Wonder game, and 12-month Nintendo Switch Online membership."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "switch-neon-sports-nso",
        name: "Nintendo Switch (Neon Red/Blue) + Switch Sports + 12 Months NSO",
        price: dec!(374.99),
        category: Category::Console,
        platform: Platform::Nintendo,
        image: "nintendo/switch2.png",
        description: Some("Standard Switch with neon Joy-Cons, Nintendo Switch Sports game, and annual online membership."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "switch-lite-turquoise",
        name: "Nintendo Switch Lite - Turquoise",
        price: dec!(299.99),
        category: Category::Console,
        platform: Platform::Nintendo,
        image: "nintendo/t.png",
        description: Some("Compact handheld-only Switch in vibrant turquoise color. Perfect for gaming on the go."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "switch-lite-coral",
        name: "Nintendo Switch Lite - Coral Pink",
        price: dec!(299.99),
        category: Category::Console,
        platform: Platform::Nintendo,
        image: "nintendo/p.png",
        description: Some("Stylish coral pink edition of the handheld Nintendo Switch Lite console."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "switch-lite-y",
        name: "Nintendo Switch Lite - Coral yellow",
        price: dec!(299.99),
        category: Category::Console,
        platform: Platform::Nintendo,
        image: "nintendo/y.png",
        description: Some("Stylish coral yellow edition of the handheld Nintendo Switch Lite console."),
        accessory_kind: None,
    },

    // Nintendo games
    CatalogEntry {
        id: "hogwarts-legacy-switch",
        name: "Harry Potter - Hogwarts Legacy",
        price: dec!(44.99),
        category: Category::Games,
        platform: Platform::Nintendo,
        image: "/nintendo/hogwarts.png",
        description: Some("Experience the wizarding world in this open-world RPG set in 1800s Hogwarts."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "minecraft-switch",
        name: "Minecraft for Nintendo Switch",
        price: dec!(32.99),
        category: Category::Games,
        platform: Platform::Nintendo,
        image: "/nintendo/minecraft.png",
        description: Some("The complete Minecraft experience optimized for Nintendo Switch with cross-platform play."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "mario-kart-8-deluxe",
        name: "Mario Kart 8 Deluxe",
        price: dec!(64.49),
        category: Category::Games,
        platform: Platform::Nintendo,
        image: "/nintendo/mario.png",
        description: Some("Definitive Mario Kart experience with all DLC tracks and characters included."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "star-wars-heritage",
        name: "Star Wars Heritage Pack",
        price: dec!(52.50),
        category: Category::Games,
        platform: Platform::Nintendo,
        image: "/nintendo/starwars.png",
        description: Some("Collection of classic Star Wars games remastered for Nintendo Switch."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "ubisoft",
        name: "Ubisoft Rayman Legends Definitive Edition",
        price: dec!(22.49),
        category: Category::Games,
        platform: Platform::Nintendo,
        image: "/nintendo/ubisoft.png",
        description: None,
        accessory_kind: None,
    },
    CatalogEntry {
        id: "animal-crossing-nh",
        name: "Animal Crossing: New Horizons",
        price: dec!(64.49),
        category: Category::Games,
        platform: Platform::Nintendo,
        image: "/nintendo/animal.png",
        description: Some("Create your perfect island getaway in this beloved life simulation game."),
        accessory_kind: None,
    },

    // Nintendo accessories
    CatalogEntry {
        id: "switch-pro-controller-2",
        name: "Nintendo Switch 2 Pro Controller",
        price: dec!(112.49),
        category: Category::Accessories,
        platform: Platform::Nintendo,
        image: "/nintendo/switchpro.png",
        description: Some("Enhanced Pro Controller with improved ergonomics and battery life."),
        accessory_kind: Some(AccessoryKind::Controllers),
    },
    CatalogEntry {
        id: "switch-case-nofear",
        name: "Switch Case",
        price: dec!(7.50),
        category: Category::Accessories,
        platform: Platform::Nintendo,
        image: "/nintendo/switchcase.png",
        description: Some("Protective carrying case for Nintendo Switch consoles."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "joycon-charging-dock",
        name: "Joy-Con Charging Dock",
        price: dec!(26.99),
        category: Category::Accessories,
        platform: Platform::Nintendo,
        image: "/nintendo/joycon.png",
        description: Some("Charge up to 4 Joy-Con controllers simultaneously."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "joycon-pair-lr",
        name: "Joy-Con (L+R) Pair",
        price: dec!(112.49),
        category: Category::Accessories,
        platform: Platform::Nintendo,
        image: "/nintendo/joyconpair.png",
        description: Some("Additional Joy-Con controllers for multiplayer gaming."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "nano-controller-spring",
        name: "Nano Enhanced Wireless Controller - Spring Dream",
        price: dec!(45.00),
        category: Category::Accessories,
        platform: Platform::Nintendo,
        image: "/nintendo/wireless.png",
        description: Some("Compact wireless controller with floral spring design and motion controls."),
        accessory_kind: Some(AccessoryKind::Controllers),
    },

    // Nintendo digital
    CatalogEntry {
        id: "nso-3month",
        name: "Nintendo Switch Online 3 Month Membership",
        price: dec!(10.49),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/3month.png",
        description: Some("90-day access to online play, cloud saves, and NES/SNES game library."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "nso-12month",
        name: "Nintendo Switch Online 12 Month Membership",
        price: dec!(26.99),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/12.png",
        description: Some("1-year subscription for online multiplayer, classic games, and cloud backup."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "nso-family-12month",
        name: "Nintendo Switch Online 12 Month Family Membership",
        price: dec!(47.99),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/12family.png",
        description: Some("Annual plan covering up to 8 Nintendo accounts for the whole family."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "nso-expansion-12month",
        name: "NSO + Expansion Pack 12 Month Membership",
        price: dec!(52.49),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/nso.png",
        description: Some("Includes N64, Genesis games and Animal Crossing DLC along with standard NSO benefits."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "nso-expansion-family",
        name: "NSO + Expansion Pack 12 Month Family Membership",
        price: dec!(89.99),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/nsof.png",
        description: Some("Premium family plan with expansion content for up to 8 users."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "botw-expansion",
        name: "Zelda: Breath of the Wild Expansion Pass",
        price: dec!(26.99),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/wild.png",
        description: Some("Includes The Master Trials and The Champions Ballad DLC packs with new story content."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "acnh-happy-home",
        name: "Animal Crossing: Happy Home Paradise",
        price: dec!(33.74),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/animalcrossing.png",
        description: Some("Design vacation homes and facilities in this massive New Horizons expansion."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "mk8-booster-pass",
        name: "Mario Kart 8 Deluxe Booster Course Pass",
        price: dec!(37.49),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/mariocart.png",
        description: Some("48 remastered courses from Mario Kart history across 6 waves of content."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "pokemon-sv-expansion",
        name: "Pokémon Scarlet/Violet Expansion Pass",
        price: dec!(47.24),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/pokemon.png",
        description: Some("The Hidden Treasure of Area Zero DLC with new areas, stories and Pokémon."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "ssbu-ultima",
        name: "Super Smash Bros. Ultimate DDC AOC",
        price: dec!(8.09),
        category: Category::Digital,
        platform: Platform::Nintendo,
        image: "/nintendo/nsw.png",
        description: Some("Additional content pack for Super Smash Bros. Ultimate (specific content may vary)."),
        accessory_kind: None,
    },

    // PC games
    CatalogEntry {
        id: "sociable24",
        name: "Sociable Soccer 24",
        price: dec!(18.00),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/sociable.png",
        description: Some("Fast-paced arcade football game with modern mechanics and retro spirit."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "wrthaeon",
        name: "Wrath: Aeon Of Ruin",
        price: dec!(9.00),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/wrath.png",
        description: Some("Classic FPS with modern visuals set in a dark fantasy world."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "acshadowsce",
        name: "Assassins Creed Shadows Collectors Edition",
        price: dec!(284.99),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/ass.png",
        description: Some("Collector's edition featuring exclusive physical and digital content."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "fsim22p",
        name: "Farming Simulator 22 Premium Expansion",
        price: dec!(7.50),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/farming.png",
        description: Some("Expansion adding new crops, vehicles and farming activities."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "endlessdng",
        name: "ENDLESS Dungeon Day One Edition",
        price: dec!(15.00),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/endless.png",
        description: Some("Roguelike tactical action with shooting and tower defense elements."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "forgiveme",
        name: "Forgive me Father",
        price: dec!(9.00),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/forgive.png",
        description: Some("Lovecraftian horror FPS with comic book-style visuals."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "talisman40",
        name: "Talisman - 40th Anniversary Edition",
        price: dec!(16.50),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/talisman.png",
        description: Some("Digital adaptation of the classic fantasy board game."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "theinvinc",
        name: "The Invincible",
        price: dec!(37.49),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/the.png",
        description: Some("Story-driven adventure based on Stanislaw Lem's sci-fi novel."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "tpmuseum",
        name: "Two Point Museum - Explorer Edition",
        price: dec!(52.49),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/two.png",
        description: Some("Build and manage your dream museum in this management sim."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "civ7",
        name: "Sid Meier's Civilization VII",
        price: dec!(79.49),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/sid.png",
        description: Some("Next installment in the award-winning strategy franchise."),
        accessory_kind: None,
    },
    CatalogEntry {
        id: "indianajonesce",
        name: "Indiana Jones and the Great Circle: Collector's Edition",
        price: dec!(284.99),
        category: Category::Games,
        platform: Platform::Pc,
        image: "/pc/in.png",
        description: Some("Collector's edition with exclusive physical and digital content."),
        accessory_kind: None,
    },

    // PC accessories
    CatalogEntry {
        id: "stealthledmat",
        name: "Light-Up LED XL Gaming Mat",
        price: dec!(22.49),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/lightup.png",
        description: Some("Extra-large LED-lit gaming surface for PC and consoles with non-slip base."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "dualsenseedge",
        name: "DualSense Edge Wireless Controller",
        price: dec!(299.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/dual.png",
        description: Some("Premium customizable controller with interchangeable components."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "aoc24monitor",
        name: "AOC 24G4XF Monitor",
        price: dec!(209.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/aoc.png",
        description: Some("24\" gaming monitor with 165Hz refresh rate."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "yunixmicblack",
        name: "GXT234 Yunix Microphone",
        price: dec!(44.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/gxt234.png",
        description: Some("Professional condenser microphone."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "exiscam",
        name: "Exis Webcam",
        price: dec!(10.50),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/exis.png",
        description: Some("HD webcam with built-in microphone."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "rival600",
        name: "Rival 600 Mouse",
        price: dec!(42.00),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/rival.png",
        description: Some("High-performance gaming mouse."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "ferrariwheel",
        name: "Ferrari SF1000 Wheel",
        price: dec!(472.49),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/g920.png",
        description: Some("Premium racing wheel with F1 controls."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "nofearmat",
        name: "Mouse Mat",
        price: dec!(3.75),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/mousemat.png",
        description: Some("Standard non-slip mouse pad."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "mantismic",
        name: "GXT232 Mantis Mic",
        price: dec!(37.49),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/gxt232.png",
        description: Some("Compact USB microphone."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "recon70",
        name: "Recon 70 Headset",
        price: dec!(44.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/recon.png",
        description: Some("Lightweight gaming headset."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "roccatpad",
        name: "ROCCAT Mousepad",
        price: dec!(14.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/sense.png",
        description: Some("Square gaming mousepad."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "neatmic",
        name: "Neat Skyline Mic",
        price: dec!(30.00),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/neat.png",
        description: Some("USB condenser microphone."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "xenonctrl",
        name: "Xenon Xbox Controller",
        price: dec!(52.49),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/xenon.png",
        description: Some("Wired Xbox controller."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "g502mouse",
        name: "G502 Hero Mouse",
        price: dec!(60.00),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/g502.png",
        description: Some("Popular gaming mouse with Hero sensor."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "quantum400",
        name: "Quantum 400 Headset",
        price: dec!(52.50),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/quantum.png",
        description: Some("Wired gaming headset."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "roccatstand",
        name: "ROCCAT Headset Stand",
        price: dec!(7.50),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/headset.png",
        description: Some("Headset holder with cable management."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "silentmouse",
        name: "Silent Bluetooth Mouse",
        price: dec!(19.49),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/silent.png",
        description: Some("Quiet wireless mouse."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "rgbdesk",
        name: "Luminous RGB Desk",
        price: dec!(224.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/gxt709w.png",
        description: Some("Gaming desk with RGB lighting."),
        accessory_kind: Some(AccessoryKind::GamingDesks),
    },
    CatalogEntry {
        id: "ultralightmouse",
        name: "Ultralight Mouse",
        price: dec!(26.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/ultra.png",
        description: Some("Lightweight wireless gaming mouse."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "hxheadset",
        name: "HX-WPRO Headset",
        price: dec!(49.50),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/hx.png",
        description: Some("Wireless gaming headset."),
        accessory_kind: Some(AccessoryKind::Headsets),
    },
    CatalogEntry {
        id: "mxw3mouse",
        name: "MX-W3 Mouse",
        price: dec!(19.50),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/hxblack.png",
        description: Some("Wireless RGB mouse."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "mx3mouse",
        name: "MX3 Mouse",
        price: dec!(14.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/mx.png",
        description: Some("Basic wired mouse."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "duchessblack",
        name: "DuchesS Xbox Controller",
        price: dec!(59.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/mx3.png",
        description: Some("Xbox controller in black."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "duchesswhite",
        name: "DuchesS Xbox Controller",
        price: dec!(59.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/hyperkinw.png",
        description: Some("Xbox controller in white."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "origins60",
        name: "Alloy Origins 60 Keyboard",
        price: dec!(164.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/alloy.png",
        description: Some("Compact mechanical keyboard."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "wolverinev2",
        name: "Wolverine V2 Pro Controller",
        price: dec!(299.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/wolverine.png",
        description: Some("Wireless PS5 controller."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "magmakeyboard",
        name: "Magma Keyboard",
        price: dec!(45.00),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/magma.png",
        description: Some("Membrane RGB keyboard."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "vulkankeyboard",
        name: "Vulcan TKL Keyboard",
        price: dec!(75.00),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/vulcan.png",
        description: Some("Tenkeyless mechanical keyboard."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "apex3keyboard",
        name: "Apex 3 TKL Keyboard",
        price: dec!(57.00),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/apex.png",
        description: Some("Tenkeyless gaming keyboard."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "gprokeyboard",
        name: "G Pro TKL Keyboard",
        price: dec!(149.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/gpro.png",
        description: Some("Mechanical esports keyboard."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "wolverinev3te",
        name: "Wolverine V3 TE",
        price: dec!(149.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/razer.png",
        description: Some("Tournament edition controller."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "wolverinev3pro",
        name: "Wolverine V3 Pro",
        price: dec!(299.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/ac/razer2.png",
        description: Some("Premium tournament controller."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "tdaggertanker",
        name: "T-Dagger Tanker Keyboard",
        price: dec!(14.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/images/tdagger.png",
        description: Some("Budget gaming keyboard."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "thadokeyboard",
        name: "GXT Thado Keyboard",
        price: dec!(34.49),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/images/gxt.png",
        description: Some("TKL mechanical keyboard."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "tplinkmesh",
        name: "TP-Link Mesh Wi-Fi 6",
        price: dec!(254.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/images/tplink.png",
        description: Some("Whole home Wi-Fi 6 system."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "yunixmicwhite",
        name: "Yunix Mic (White)",
        price: dec!(44.99),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/images/gxt234.png",
        description: Some("White version of condenser mic."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
    CatalogEntry {
        id: "nanoleaf4d",
        name: "Nanoleaf 4D Kit",
        price: dec!(52.50),
        category: Category::Accessories,
        platform: Platform::Pc,
        image: "/images/na.png",
        description: Some("Screen mirror lighting kit."),
        accessory_kind: Some(AccessoryKind::PcAccessories),
    },
];
