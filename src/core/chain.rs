use glam::Vec2;

/// Advance the trail chain one frame.
///
/// The head of the traversal starts at the live pointer position. Each dot
/// renders at the current head, then the head moves `follow` of the way
/// toward the next dot's recorded position and is stored back as this dot's
/// new position. The last dot wraps around and chases the first dot, which
/// at that point already holds its freshly updated position.
///
/// `render` receives the position each dot should be drawn at this frame;
/// `chain` holds the recorded positions and is updated in place. With the
/// pointer at rest every recorded position converges geometrically onto it.
pub fn step_chain(chain: &mut [Vec2], render: &mut [Vec2], pointer: Vec2, follow: f32) {
    debug_assert_eq!(chain.len(), render.len());
    let len = chain.len().min(render.len());
    let mut head = pointer;
    for i in 0..len {
        render[i] = head;
        let next = chain[(i + 1) % len];
        head += (next - head) * follow;
        chain[i] = head;
    }
}
