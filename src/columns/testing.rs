//! Canonical sample documents
//!
//! Shared sources for unit and integration tests. Tests load these instead
//! of inlining table text so the expected behaviors stay in one place.

/// A plain table among prose, with a single-blank-line separator inside it.
pub const TREND: &str = "
Notice the trend here?



California     39.5   40
0123456789     3456   0123
Texas *Ya!*   29.0   26.2

Antarctica     0.0    -


This is not part of the table because it is a two line break from above.
";

/// Header and footer delimited by punctuation separator lines.
pub const SEPARATOR_HEADER_FOOTER: &str = "
I have headers and footers using separators

State            Population
                 ---------------------
California         39.5
Texas              29.0
                  ++++
Total (million)    68.5
";

/// Header and footer marked by emphasis decoration.
pub const DECORATED_HEADER_FOOTER: &str = "
  I have headers and footers with punctuation

  *State*        *Population*
  California     39.5
  Texas          29.0
  _Total_        _68.5 (million)_";

/// A gallery of near-tables that must all be rejected.
pub const NOT_TABLES: &str = "
I am not a table

I'm not a table because I am indented too far.

      *State*        *Population*
      California     39.5
      Texas          29.0
      _Total_        _68.5 (million)_

and I'm not because my fields overlap.

  *State*        *Population*
  California Republic    39.5
  Texas          29.0
  _Total_        _68.5 (million)_

And I'm not because I didn't skip a space, so fields overlap.
California     39.5
Texas          29.0
_Total_        _68.5 (million)_

And I'm not because I only have one column
California
Texas
_Total_

And I'm too short

California     39.5
";

/// Calculated placeholders in a footer behind a dash separator.
pub const CALCULATED_FOOTER: &str = "
I have computed fields in my footer

California        39.5
Texas             29.0
-------------
_<#> States_      _<+> (average <avg>)_   <%>
";

/// Blank line inside the table and numeric alignment.
pub const BLANK_LINES: &str = "
I have blank lines and numeric alignment

Washington    12.5
California    39.5

Texas         29.0
Arkansas      13.4";

/// Nested list cells plus comma-grouped totals.
pub const LISTS_AND_COMMAS: &str = "
I have lists and commas in my totals

California
* Born US Citizen  28883435
* Foreign Born     10628788
Texas
* Born US Citizen  24066582
* Foreign Born     4929300
_Total_            _<+> (avg <avg>)_              <%>
";

/// Ragged indentation that still resolves to two columns.
pub const CRAZY_ALIGNMENT: &str = "
I have crazy alignment.

                                Total
                              --
California                     39.5
        Texas                     29.0
              Rhode Island  1.0
";

/// Dashes as separators, no-value markers, and zero-sum footers.
pub const TRICKY_DASHES: &str = "
Dashes are tricky

               2nd column title indented like code block
-
Dash above is  title line separator
-              dash is 'no-value' for counting
Dash below is  footer line separator
-
2 items (<#>)  <+>=0 from no numbers
";

/// Independent outlines in both columns.
pub const OUTLINES: &str = "
First Label                             Second Label
-----------                             -------
Top level                               9.  ordered
* Down one                              10. more
  * Two                                     and I'm just indented as if I'm part of it.
* One again                             * Now bullet
  * Two more                            1.  back to numbers
Top Again
        + One just under indented more
";
