#[cfg(test)]
pub const POST_WITH_TIME: &str = r##"---
title: Learning Rust the hard way
subhead: "Notes from a borrow checker fight"
date: 2024-04-03 10:30
---

Some intro text.

<!-- more -->

## Lifetimes

<div class="callout">Raw HTML is allowed in posts.</div>
"##;

#[cfg(test)]
pub const POST_DATE_ONLY: &str = r##"---
title: Hello world
date: 2023-11-20
---
First post on the new site.
"##;

#[cfg(test)]
pub const POST_OLD: &str = r##"---
title: "Why I switched careers"
date: '2022-01-05 08:00'
---
From teaching to software.
"##;

#[cfg(test)]
pub const POST_UNDATED: &str = r##"---
title: A page without a date
---
Still a valid post.
"##;

#[cfg(test)]
pub const POST_BAD_DATE: &str = r##"---
title: Broken date
date: 2024-02-30
---
Never shown.
"##;

#[cfg(test)]
pub const POST_NO_FRONT_MATTER: &str = r##"# Forgot the metadata

Never shown either.
"##;
