use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// 0 to 5 stars.
    pub rating: u8,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Sarah Mitchell",
        role: "Founder, Bloom Marketing",
        quote: "VirtualTech cleared a three-month backlog of data entry in two weeks. I finally have my evenings back.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=200&q=80",
    },
    Testimonial {
        author: "James Okafor",
        role: "Operations Lead, Relay Logistics",
        quote: "Their inbox management alone is worth it. Client emails get answered before I've had my coffee.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=200&q=80",
    },
    Testimonial {
        author: "Elena Petrova",
        role: "Independent Consultant",
        quote: "The pitch deck they built won me my biggest contract this year. Professional, fast, no hand-holding needed.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=200&q=80",
    },
    Testimonial {
        author: "Daniel Asante",
        role: "CEO, Northline Traders",
        quote: "Weekly Tableau reports that used to eat a full day of my analyst's time now just appear. Highly recommend.",
        rating: 4,
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&w=200&q=80",
    },
    Testimonial {
        author: "Mia Lindqvist",
        role: "Owner, Lindqvist Studio",
        quote: "Responsive at any hour. It genuinely feels like having a full-time assistant at a fraction of the cost.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?auto=format&fit=crop&w=200&q=80",
    },
];

/// One full traversal of the (non-doubled) item list.
pub const LOOP_DURATION_MS: u32 = 15_000;

const TICK_MS: u32 = 16;

/// Per-card footprint used until the track has rendered and can be measured.
const FALLBACK_CARD_WIDTH_PX: f64 = 380.0;

/// Linear offset into the loop: constant velocity, no easing. `elapsed_ms` is
/// taken modulo the loop duration, so the animation restarts from 0 the
/// instant it reaches the full displacement.
pub fn loop_offset(elapsed_ms: u32, loop_width: f64) -> f64 {
    loop_width * f64::from(elapsed_ms % LOOP_DURATION_MS) / f64::from(LOOP_DURATION_MS)
}

/// The rendered sequence is the list concatenated with itself: the second
/// copy slides into the space the first vacates, so the modulo restart lands
/// on an identical frame and the loop reads as infinite.
pub fn doubled() -> impl Iterator<Item = &'static Testimonial> {
    TESTIMONIALS.iter().chain(TESTIMONIALS.iter())
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel() -> Html {
    let offset = use_state(|| 0.0f64);
    let track_ref = use_node_ref();

    {
        let offset = offset.clone();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut elapsed: u32 = 0;
                let interval = Interval::new(TICK_MS, move || {
                    elapsed = (elapsed + TICK_MS) % LOOP_DURATION_MS;
                    // Half the track width, because the track holds the
                    // doubled list. Re-measured every tick so the loop stays
                    // seamless when layout changes.
                    let loop_width = track_ref
                        .cast::<Element>()
                        .map(|track| f64::from(track.scroll_width()) / 2.0)
                        .filter(|width| *width > 0.0)
                        .unwrap_or(FALLBACK_CARD_WIDTH_PX * TESTIMONIALS.len() as f64);
                    offset.set(loop_offset(elapsed, loop_width));
                });
                // Dropping the handle cancels the timer on unmount.
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="carousel-viewport">
            <style>
                {r#"
                    .carousel-viewport {
                        overflow: hidden;
                        width: 100%;
                    }
                    .carousel-track {
                        display: flex;
                        gap: 2rem;
                        width: max-content;
                        will-change: transform;
                    }
                    .testimonial-card {
                        width: 340px;
                        flex-shrink: 0;
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 12px;
                        padding: 2rem;
                    }
                    .testimonial-card blockquote {
                        margin: 0 0 1.5rem 0;
                        color: #ddd;
                        font-style: italic;
                        line-height: 1.6;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .testimonial-author img {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .testimonial-name {
                        color: #fff;
                        font-weight: 600;
                    }
                    .testimonial-role {
                        color: #999;
                        font-size: 0.85rem;
                    }
                    .testimonial-stars {
                        color: #7EB2FF;
                        margin-left: auto;
                        letter-spacing: 2px;
                    }
                "#}
            </style>
            <div
                class="carousel-track"
                ref={track_ref}
                style={format!("transform: translateX(-{}px);", *offset)}
            >
                {
                    doubled().enumerate().map(|(index, testimonial)| html! {
                        <div class="testimonial-card" key={index}>
                            <blockquote>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
                            <div class="testimonial-author">
                                <img src={testimonial.avatar} alt={testimonial.author} loading="lazy" />
                                <div>
                                    <div class="testimonial-name">{testimonial.author}</div>
                                    <div class="testimonial-role">{testimonial.role}</div>
                                </div>
                                <span class="testimonial-stars">{stars(testimonial.rating)}</span>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_starts_at_zero_and_returns_there_after_one_loop() {
        assert_eq!(loop_offset(0, 1_900.0), 0.0);
        assert_eq!(loop_offset(LOOP_DURATION_MS, 1_900.0), 0.0);
        assert_eq!(loop_offset(2 * LOOP_DURATION_MS, 1_900.0), 0.0);
    }

    #[test]
    fn offset_is_linear_within_a_loop() {
        let width = 1_900.0;
        let half = loop_offset(LOOP_DURATION_MS / 2, width);
        assert_eq!(half, width / 2.0);

        let third = loop_offset(LOOP_DURATION_MS / 3, width);
        let two_thirds = loop_offset(2 * (LOOP_DURATION_MS / 3), width);
        assert!((two_thirds - 2.0 * third).abs() < 1e-9);
    }

    #[test]
    fn offset_never_reaches_the_seam() {
        let width = 1_900.0;
        assert!(loop_offset(LOOP_DURATION_MS - 1, width) < width);
    }

    #[test]
    fn the_seam_lands_on_an_identical_frame() {
        let n = TESTIMONIALS.len();
        let sequence: Vec<_> = doubled().collect();
        assert_eq!(sequence.len(), 2 * n);
        for i in 0..n {
            // Card one loop-width past card `i` is the same card.
            assert_eq!(sequence[i], sequence[i + n]);
        }
    }

    #[test]
    fn ratings_stay_in_range() {
        for testimonial in TESTIMONIALS {
            assert!(testimonial.rating <= 5, "{}", testimonial.author);
        }
    }

    #[test]
    fn stars_render_filled_then_hollow() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }
}
