/*!
# Introduction to Sally Forth

Everything in Sally Forth happens on the operand stack. Numbers are pushed
when they are read and words take their operands off the top. There are no
parentheses and no precedence: you write the operands first and the
operation last.

<pre><code>&nbsp;> 2 3 + 4 * . CR
&nbsp;  20
</code></pre>

`.` pops and prints, `SP` prints a space and `CR` ends the line. Text between
`."` and `"` is a string literal, and `//` comments out the rest of a line.

<pre><code>&nbsp;> ."Hello, world" . CR   // greet
&nbsp;  Hello, world
</code></pre>

## Words

| Word | Stack | |
|---|---|---|
| `+ - * / %` | a b -- n | `/` and `%` truncate toward zero |
| `NEG` | a -- n | |
| `< <= == != >= >` | a b -- flag | `3 5 <` is `1` |
| `AND OR` | a b -- flag | only `1` is true |
| `NOT` | a -- flag | `0` becomes `1`, anything else `0` |
| `DUP` | a -- a a | the copy is a plain integer |
| `DROP` | a -- | |
| `SWAP` | a b -- b a | |
| `ROT` | a b c -- b c a | |
| `.` | a -- | prints a number or a string |
| `SP CR` | -- | space, newline |
| `SET` | value name -- | makes a new variable |
| `@` | name -- value | |
| `!` | value name -- | changes an existing variable |
| `DUMP` | -- | shows the stack on the diagnostic stream |

`SWAP` and `ROT` also hand back plain integers: a string moved by them
becomes `0`.

## Variables

A word nobody has defined is pushed as it is, which is how a variable name
gets to `SET`. After that the name stands for the variable and `@` reads it.

<pre><code>&nbsp;> 10 X SET
&nbsp;> X @ 1 + X !
&nbsp;> X @ . CR
&nbsp;  11
</code></pre>

A name can be `SET` only once. Setting it again, or reading a name that was
never set, is reported and the program carries on. `!` on an unknown name
does nothing.

## Conditionals

`IFTHEN` pops a flag. If it is `1` the words up to `ELSE` run, otherwise
the words between `ELSE` and `ENDIF` run. `ELSE` may be left out.
Conditionals nest.

<pre><code>&nbsp;> 7 2 % 0 == IFTHEN ."even" ELSE ."odd" ENDIF . CR
&nbsp;  odd
</code></pre>

## Loops

`DO ... UNTIL` runs its body, then pops a flag; `1` ends the loop and
anything else runs the body again. The body always runs at least once.

<pre><code>&nbsp;> 0 I SET
&nbsp;> DO I @ 1 + I ! I @ . SP I @ 5 == UNTIL CR
&nbsp;  1 2 3 4 5
</code></pre>

## Errors

Running out of operands, dividing by zero, overflowing a 64-bit integer or
a misplaced `ELSE`/`ENDIF` stops the program with a message naming the
input line.

*/
