//! UI domain: ornament counter HUD element.

use bevy::prelude::*;

use crate::ornament::CollectedOrnaments;

const HUD_PADDING: f32 = 16.0;

/// Marker for the ornament counter container
#[derive(Component)]
pub struct OrnamentCounterUI;

/// Marker for the counter text
#[derive(Component)]
pub struct OrnamentCountText;

pub(crate) fn spawn_ornament_counter(mut commands: Commands) {
    commands
        .spawn((
            OrnamentCounterUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Ornament icon (gold square)
            parent.spawn((
                Node {
                    width: Val::Px(14.0),
                    height: Val::Px(14.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.95, 0.8, 0.3)),
            ));

            parent.spawn((
                OrnamentCountText,
                Text::new("0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.92, 0.88, 0.6)),
            ));
        });
}

pub(crate) fn update_ornament_counter(
    collected: Res<CollectedOrnaments>,
    mut query: Query<&mut Text, With<OrnamentCountText>>,
) {
    if collected.is_changed() {
        for mut text in &mut query {
            **text = format!("{}", collected.count);
        }
    }
}
